//! Shared application state.

use std::sync::Arc;

use cattery_cats::domain::repository::CatRepository;
use cattery_core::clock::Clock;
use chrono::{DateTime, Utc};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of "now" for ages, validation, and health timestamps.
    pub clock: Arc<dyn Clock>,
    /// The cat store.
    pub cat_repository: Arc<dyn CatRepository>,
    /// When this state was built, read from `clock`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state, stamping the start time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, cat_repository: Arc<dyn CatRepository>) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            cat_repository,
            started_at,
        }
    }
}
