//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fooserver_domain::error::FooServerError;

/// JSON error body returned on rejected requests.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request failures to an HTTP response with appropriate status code.
///
/// Not-found responses carry an empty body; validation failures and
/// malformed payloads carry a JSON body with a human-readable message.
pub enum ApiError {
    /// A domain or application error.
    Domain(FooServerError),
    /// The request body was missing or not parseable as the expected JSON.
    MalformedBody(String),
}

impl From<FooServerError> for ApiError {
    fn from(err: FooServerError) -> Self {
        Self::Domain(err)
    }
}

impl ApiError {
    /// Reject a request whose body could not be read as the expected JSON.
    pub fn malformed_body(hint: impl Into<String>) -> Self {
        Self::MalformedBody(hint.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(FooServerError::Validation(err)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::Domain(FooServerError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            Self::MalformedBody(hint) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: hint })).into_response()
            }
        }
    }
}
