//! Foo service — use-cases for managing foos.

use fooserver_domain::error::{FooServerError, NotFoundError};
use fooserver_domain::foo::Foo;
use fooserver_domain::id::FooId;

use crate::ports::FooRepository;

/// Application service for foo create/get/delete operations.
pub struct FooService<R> {
    repo: R,
}

impl<R: FooRepository> FooService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new foo after validating domain invariants.
    ///
    /// Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`FooServerError::Validation`] if invariants fail, or an
    /// error propagated from the repository.
    pub async fn create_foo(&self, foo: Foo) -> Result<Foo, FooServerError> {
        foo.validate()?;
        let created = self.repo.create(foo).await?;
        tracing::debug!(id = %created.id, "foo created");
        Ok(created)
    }

    /// Look up a foo by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`FooServerError::NotFound`] when no foo with `id` exists,
    /// or an error from the repository.
    pub async fn get_foo(&self, id: FooId) -> Result<Foo, FooServerError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Foo",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a foo by id.
    ///
    /// Returns `true` when a foo was removed, `false` when the id matched
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn delete_foo(&self, id: FooId) -> Result<bool, FooServerError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            tracing::debug!(id = %id, "foo deleted");
        }
        Ok(removed)
    }

    /// Remove every stored foo. Test/utility only.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn reset(&self) -> Result<(), FooServerError> {
        self.repo.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fooserver_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryFooRepo {
        store: Mutex<HashMap<FooId, Foo>>,
    }

    impl Default for InMemoryFooRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new(HashMap::new()),
            }
        }
    }

    impl FooRepository for InMemoryFooRepo {
        fn create(&self, foo: Foo) -> impl Future<Output = Result<Foo, FooServerError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(foo.id, foo.clone());
            async { Ok(foo) }
        }

        fn get_by_id(
            &self,
            id: FooId,
        ) -> impl Future<Output = Result<Option<Foo>, FooServerError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn delete(&self, id: FooId) -> impl Future<Output = Result<bool, FooServerError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }

        fn clear(&self) -> impl Future<Output = Result<(), FooServerError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.clear();
            async { Ok(()) }
        }
    }

    fn make_service() -> FooService<InMemoryFooRepo> {
        FooService::new(InMemoryFooRepo::default())
    }

    fn valid_foo() -> Foo {
        Foo::builder().name("Test").build().unwrap()
    }

    #[tokio::test]
    async fn should_create_foo_when_valid() {
        let svc = make_service();
        let foo = valid_foo();
        let id = foo.id;

        let created = svc.create_foo(foo).await.unwrap();
        assert_eq!(created.id, id);
        assert_eq!(created.name, "Test");

        let fetched = svc.get_foo(id).await.unwrap();
        assert_eq!(fetched.name, "Test");
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let mut foo = valid_foo();
        let id = foo.id;
        foo.name = String::new();

        let result = svc.create_foo(foo).await;
        assert!(matches!(
            result,
            Err(FooServerError::Validation(ValidationError::EmptyName))
        ));

        // Nothing must be stored after a failed create.
        let lookup = svc.get_foo(id).await;
        assert!(matches!(lookup, Err(FooServerError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_assign_unique_ids_across_creates() {
        let svc = make_service();
        let a = svc.create_foo(valid_foo()).await.unwrap();
        let b = svc.create_foo(valid_foo()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_foo_missing() {
        let svc = make_service();
        let result = svc.get_foo(FooId::new()).await;
        assert!(matches!(result, Err(FooServerError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_existing_foo_exactly_once() {
        let svc = make_service();
        let foo = valid_foo();
        let id = foo.id;
        svc.create_foo(foo).await.unwrap();

        assert!(svc.delete_foo(id).await.unwrap());
        assert!(!svc.delete_foo(id).await.unwrap());

        let result = svc.get_foo(id).await;
        assert!(matches!(result, Err(FooServerError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_unknown_id() {
        let svc = make_service();
        assert!(!svc.delete_foo(FooId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn should_remove_everything_on_reset() {
        let svc = make_service();
        let a = svc.create_foo(valid_foo()).await.unwrap();
        let b = svc.create_foo(valid_foo()).await.unwrap();

        svc.reset().await.unwrap();

        assert!(matches!(
            svc.get_foo(a.id).await,
            Err(FooServerError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_foo(b.id).await,
            Err(FooServerError::NotFound(_))
        ));
    }
}
