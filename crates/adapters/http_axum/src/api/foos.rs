//! JSON REST handlers for foos.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fooserver_app::ports::FooRepository;
use fooserver_domain::error::{FooServerError, NotFoundError};
use fooserver_domain::foo::Foo;
use fooserver_domain::id::FooId;

use crate::error::ApiError;
use crate::state::AppState;

/// Hint returned when the create body is missing or not valid JSON.
const PAYLOAD_HINT: &str = r#"Please provide a JSON payload, e.g. {"name": "foo"}"#;

/// Request body for creating a foo.
#[derive(Deserialize)]
pub struct CreateFooRequest {
    pub name: String,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Foo>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Foo>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// The id is opaque to clients; anything that cannot be a stored id is a miss.
fn not_found(id: String) -> ApiError {
    ApiError::from(FooServerError::from(NotFoundError { entity: "Foo", id }))
}

/// `POST /foo`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateFooRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: FooRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejecting create payload");
        ApiError::malformed_body(PAYLOAD_HINT)
    })?;

    let foo = Foo::builder().name(req.name).build()?;
    let created = state.foo_service.create_foo(foo).await?;
    Ok(CreateResponse::Ok(Json(created)))
}

/// `GET /foo/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: FooRepository + Send + Sync + 'static,
{
    let Ok(foo_id) = FooId::from_str(&id) else {
        return Err(not_found(id));
    };
    let foo = state.foo_service.get_foo(foo_id).await?;
    Ok(GetResponse::Ok(Json(foo)))
}

/// `DELETE /foo/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: FooRepository + Send + Sync + 'static,
{
    let Ok(foo_id) = FooId::from_str(&id) else {
        return Err(not_found(id));
    };
    if state.foo_service.delete_foo(foo_id).await? {
        Ok(DeleteResponse::NoContent)
    } else {
        Err(not_found(id))
    }
}
