//! Storage port — repository trait for the Foo store.

use std::future::Future;

use fooserver_domain::error::FooServerError;
use fooserver_domain::foo::Foo;
use fooserver_domain::id::FooId;

/// Repository for persisting and querying [`Foo`]s.
pub trait FooRepository {
    /// Insert a new foo into the store and return the stored copy.
    fn create(&self, foo: Foo) -> impl Future<Output = Result<Foo, FooServerError>> + Send;

    /// Get a foo by its unique identifier.
    fn get_by_id(
        &self,
        id: FooId,
    ) -> impl Future<Output = Result<Option<Foo>, FooServerError>> + Send;

    /// Remove a foo by id.
    ///
    /// Returns `true` when a foo was found and removed, `false` when the id
    /// matched nothing. Absence is a normal outcome, not an error.
    fn delete(&self, id: FooId) -> impl Future<Output = Result<bool, FooServerError>> + Send;

    /// Remove every foo from the store. Test/utility only.
    fn clear(&self) -> impl Future<Output = Result<(), FooServerError>> + Send;
}
