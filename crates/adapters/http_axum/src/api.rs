//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod foos;

use axum::Router;
use axum::routing::{get, post};

use fooserver_app::ports::FooRepository;

use crate::state::AppState;

/// Build the foo sub-router.
///
/// Paths live at the root of the router (`/foo`, `/foo/{id}`).
pub fn routes<R>() -> Router<AppState<R>>
where
    R: FooRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/foo", post(foos::create::<R>))
        .route("/foo/{id}", get(foos::get::<R>).delete(foos::delete::<R>))
}
