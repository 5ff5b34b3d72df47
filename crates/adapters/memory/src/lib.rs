//! # fooserver-adapter-memory
//!
//! In-memory storage adapter. Holds every [`Foo`] in a mutex-guarded map,
//! so concurrent requests mutating the store serialize instead of racing.
//! Nothing survives a process restart.
//!
//! ## Dependency rule
//!
//! Depends on `fooserver-app` (port traits) and `fooserver-domain` only.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

use fooserver_app::ports::FooRepository;
use fooserver_domain::error::FooServerError;
use fooserver_domain::foo::Foo;
use fooserver_domain::id::FooId;

/// Mutex-guarded `HashMap` implementing [`FooRepository`].
///
/// Each operation takes the lock for the duration of the map access, so
/// every repository call is atomic at single-request scope.
pub struct MemoryFooRepository {
    store: Mutex<HashMap<FooId, Foo>>,
}

impl Default for MemoryFooRepository {
    fn default() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }
}

impl MemoryFooRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock, recovering the map when a previous holder panicked.
    fn locked(&self) -> std::sync::MutexGuard<'_, HashMap<FooId, Foo>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FooRepository for MemoryFooRepository {
    fn create(&self, foo: Foo) -> impl Future<Output = Result<Foo, FooServerError>> + Send {
        let mut store = self.locked();
        store.insert(foo.id, foo.clone());
        async { Ok(foo) }
    }

    fn get_by_id(
        &self,
        id: FooId,
    ) -> impl Future<Output = Result<Option<Foo>, FooServerError>> + Send {
        let store = self.locked();
        let result = store.get(&id).cloned();
        async { Ok(result) }
    }

    fn delete(&self, id: FooId) -> impl Future<Output = Result<bool, FooServerError>> + Send {
        let mut store = self.locked();
        let removed = store.remove(&id).is_some();
        async move { Ok(removed) }
    }

    fn clear(&self) -> impl Future<Output = Result<(), FooServerError>> + Send {
        let mut store = self.locked();
        store.clear();
        async { Ok(()) }
    }
}
