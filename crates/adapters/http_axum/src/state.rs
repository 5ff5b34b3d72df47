//! Shared application state for axum handlers.

use std::sync::Arc;

use fooserver_app::ports::FooRepository;
use fooserver_app::services::foo_service::FooService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying type itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Foo create/get/delete service.
    pub foo_service: Arc<FooService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            foo_service: Arc::clone(&self.foo_service),
        }
    }
}

impl<R> AppState<R>
where
    R: FooRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(foo_service: FooService<R>) -> Self {
        Self {
            foo_service: Arc::new(foo_service),
        }
    }
}
