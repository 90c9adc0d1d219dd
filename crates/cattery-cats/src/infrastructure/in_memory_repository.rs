//! In-memory implementation of the `CatRepository` port.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use cattery_core::clock::Clock;
use cattery_core::error::DomainError;
use cattery_core::id::CatId;
use tokio::sync::RwLock;

use crate::domain::entities::{Cat, CatChanges, CatDetails};
use crate::domain::repository::CatRepository;

#[derive(Debug, Default)]
struct CatStore {
    cats: BTreeMap<CatId, Cat>,
    last_id: u64,
}

/// Process-local cat repository.
///
/// The map and the identifier counter sit behind one lock, so identifier
/// allocation and insertion happen as a single step and a read issued after a
/// write completes observes it.
pub struct InMemoryCatRepository {
    store: RwLock<CatStore>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCatRepository {
    /// Creates an empty repository that validates birth dates against `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: RwLock::new(CatStore::default()),
            clock,
        }
    }
}

impl fmt::Debug for InMemoryCatRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCatRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl CatRepository for InMemoryCatRepository {
    async fn get_all(&self) -> Vec<Cat> {
        self.store.read().await.cats.values().cloned().collect()
    }

    async fn get_by_id(&self, id: CatId) -> Result<Cat, DomainError> {
        self.store
            .read()
            .await
            .cats
            .get(&id)
            .cloned()
            .ok_or(DomainError::CatNotFound(id))
    }

    async fn create(&self, details: CatDetails) -> Result<Cat, DomainError> {
        let mut store = self.store.write().await;
        let id = CatId::new(store.last_id + 1);
        let cat = Cat::new(id, details, self.clock.as_ref())?;
        // Only a stored cat consumes an identifier.
        store.last_id = id.get();
        store.cats.insert(id, cat.clone());
        Ok(cat)
    }

    async fn update(&self, id: CatId, changes: CatChanges) -> Result<Cat, DomainError> {
        let mut store = self.store.write().await;
        let current = store.cats.get(&id).ok_or(DomainError::CatNotFound(id))?;
        let updated = current.with_changes(&changes, self.clock.as_ref())?;
        store.cats.insert(id, updated.clone());
        Ok(updated)
    }

    async fn remove(&self, id: CatId) -> Result<(), DomainError> {
        self.store
            .write()
            .await
            .cats
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::CatNotFound(id))
    }
}
