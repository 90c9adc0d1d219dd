//! Commands for the cat registry.

use cattery_core::id::CatId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::CatChanges;

/// Command to register a new cat.
#[derive(Debug, Clone)]
pub struct CreateCat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The cat's name.
    pub name: String,
    /// The cat's breed.
    pub breed: String,
    /// When the cat was born.
    pub birth_date: DateTime<Utc>,
    /// When the cat died, if it has.
    pub death_date: Option<DateTime<Utc>>,
}

/// Command to change some fields of a registered cat.
#[derive(Debug, Clone)]
pub struct UpdateCat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The cat to change.
    pub cat_id: CatId,
    /// The fields to overwrite.
    pub changes: CatChanges,
}

/// Command to remove a cat from the registry.
#[derive(Debug, Clone)]
pub struct DeleteCat {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The cat to remove.
    pub cat_id: CatId,
}
