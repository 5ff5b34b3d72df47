//! Foo — the sole domain object: a generated id plus a client-supplied name.

use serde::{Deserialize, Serialize};

use crate::error::{FooServerError, ValidationError};
use crate::id::FooId;

/// An entity with a server-generated id and a non-empty name.
///
/// Never mutated after creation; removed only by explicit delete or a
/// full-store reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Foo {
    pub id: FooId,
    pub name: String,
}

impl Foo {
    /// Create a builder for constructing a [`Foo`].
    #[must_use]
    pub fn builder() -> FooBuilder {
        FooBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FooServerError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), FooServerError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Foo`].
#[derive(Debug, Default)]
pub struct FooBuilder {
    id: Option<FooId>,
    name: Option<String>,
}

impl FooBuilder {
    #[must_use]
    pub fn id(mut self, id: FooId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Foo`].
    ///
    /// A fresh random id is generated when none was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`FooServerError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Foo, FooServerError> {
        let foo = Foo {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        foo.validate()?;
        Ok(foo)
    }
}
