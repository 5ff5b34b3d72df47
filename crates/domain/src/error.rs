//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`;
//! no `String` variants.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum FooServerError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup referenced an id that is not in the store.
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The `name` attribute must be a non-empty string.
    #[error("name must not be empty")]
    EmptyName,
}

/// A lookup miss, carrying what was looked for.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind (e.g. `"Foo"`).
    pub entity: &'static str,
    /// The id that missed, as supplied by the caller.
    pub id: String,
}
