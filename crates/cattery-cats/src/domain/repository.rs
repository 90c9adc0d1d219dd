//! Cat repository port.

use async_trait::async_trait;
use cattery_core::error::DomainError;
use cattery_core::id::CatId;

use super::entities::{Cat, CatChanges, CatDetails};

/// Storage port for cats.
///
/// Implementations own the collection exclusively: they assign identifiers,
/// validate through the `Cat` constructors, and are the only writers of
/// stored state.
#[async_trait]
pub trait CatRepository: Send + Sync {
    /// Returns a snapshot of every stored cat.
    async fn get_all(&self) -> Vec<Cat>;

    /// Looks up a single cat.
    async fn get_by_id(&self, id: CatId) -> Result<Cat, DomainError>;

    /// Assigns the next identifier to `details`, validates, and stores the
    /// resulting cat.
    async fn create(&self, details: CatDetails) -> Result<Cat, DomainError>;

    /// Merges `changes` over the stored cat, re-validates, and stores the
    /// result. The identifier never changes.
    async fn update(&self, id: CatId, changes: CatChanges) -> Result<Cat, DomainError>;

    /// Erases a stored cat. Its identifier is not handed out again.
    async fn remove(&self, id: CatId) -> Result<(), DomainError>;
}
