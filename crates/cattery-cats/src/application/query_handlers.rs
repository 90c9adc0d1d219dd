//! Query handlers for the cat registry.
//!
//! Queries read from the repository and return read-only view DTOs with the
//! age resolved against the supplied clock.

use cattery_core::clock::Clock;
use cattery_core::error::DomainError;
use cattery_core::id::CatId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::entities::Cat;
use crate::domain::repository::CatRepository;

/// Read-only view of a cat as returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatView {
    /// The cat identifier.
    pub id: CatId,
    /// The cat's name.
    pub name: String,
    /// The cat's breed.
    pub breed: String,
    /// When the cat was born.
    pub birth_date: DateTime<Utc>,
    /// When the cat died, or `null` while alive.
    pub death_date: Option<DateTime<Utc>>,
    /// Whole years lived as of the view's reference time.
    pub age: u32,
    /// Whether no death date is recorded.
    pub is_alive: bool,
}

impl CatView {
    /// Builds the view of `cat` with its age computed as of `now`.
    #[must_use]
    pub fn from_cat(cat: &Cat, now: DateTime<Utc>) -> Self {
        Self {
            id: cat.id(),
            name: cat.name().to_owned(),
            breed: cat.breed().to_owned(),
            birth_date: cat.birth_date(),
            death_date: cat.death_date(),
            age: cat.age_at(now),
            is_alive: cat.is_alive(),
        }
    }
}

/// Lists every registered cat.
pub async fn list_cats(repo: &dyn CatRepository, clock: &dyn Clock) -> Vec<CatView> {
    let cats = repo.get_all().await;
    info!(count = cats.len(), "retrieved cats");

    let now = clock.now();
    cats.iter().map(|cat| CatView::from_cat(cat, now)).collect()
}

/// Retrieves a single cat by ID.
///
/// # Errors
///
/// Returns `DomainError::CatNotFound` if no cat has the ID.
pub async fn get_cat_by_id(
    cat_id: CatId,
    repo: &dyn CatRepository,
    clock: &dyn Clock,
) -> Result<CatView, DomainError> {
    let cat = repo
        .get_by_id(cat_id)
        .await
        .inspect_err(|_| warn!(%cat_id, "cat not found"))?;
    info!(%cat_id, name = cat.name(), "retrieved cat");
    Ok(CatView::from_cat(&cat, clock.now()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cattery_core::error::DomainError;
    use cattery_core::id::CatId;
    use cattery_test_support::{FixedClock, SteppingClock, utc};
    use chrono::Duration;

    use crate::application::query_handlers::{get_cat_by_id, list_cats};
    use crate::domain::entities::CatDetails;
    use crate::domain::repository::CatRepository;
    use crate::infrastructure::in_memory_repository::InMemoryCatRepository;

    fn details(name: &str, birth_date: chrono::DateTime<chrono::Utc>) -> CatDetails {
        CatDetails {
            name: name.to_owned(),
            breed: "Maine Coon".to_owned(),
            birth_date,
            death_date: None,
        }
    }

    #[tokio::test]
    async fn test_list_cats_returns_views_with_ages() {
        // Arrange
        let clock = FixedClock(utc(2023, 6, 15));
        let repo = InMemoryCatRepository::new(Arc::new(clock));
        repo.create(details("Fluffy", utc(2021, 5, 10))).await.unwrap();
        repo.create(details("Mittens", utc(2019, 8, 20))).await.unwrap();

        // Act
        let views = list_cats(&repo, &clock).await;

        // Assert
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].name, "Fluffy");
        assert_eq!(views[0].age, 2);
        assert_eq!(views[1].name, "Mittens");
        assert_eq!(views[1].age, 3);
        assert!(views.iter().all(|view| view.is_alive));
    }

    #[tokio::test]
    async fn test_get_cat_by_id_returns_not_found_for_unknown_id() {
        // Arrange
        let clock = FixedClock(utc(2023, 6, 15));
        let repo = InMemoryCatRepository::new(Arc::new(clock));

        // Act
        let result = get_cat_by_id(CatId::new(5), &repo, &clock).await;

        // Assert
        match result.unwrap_err() {
            DomainError::CatNotFound(id) => assert_eq!(id, CatId::new(5)),
            other => panic!("expected CatNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_cat_by_id_ages_with_the_clock() {
        // Arrange
        let clock = Arc::new(SteppingClock::new(utc(2023, 5, 9)));
        let repo = InMemoryCatRepository::new(clock.clone());
        let cat = repo.create(details("Fluffy", utc(2021, 5, 10))).await.unwrap();

        // Act
        let before = get_cat_by_id(cat.id(), &repo, clock.as_ref()).await.unwrap();
        clock.advance(Duration::days(1));
        let after = get_cat_by_id(cat.id(), &repo, clock.as_ref()).await.unwrap();

        // Assert
        assert_eq!(before.age, 1);
        assert_eq!(after.age, 2);
    }

    #[tokio::test]
    async fn test_cat_view_serializes_camel_case() {
        // Arrange
        let clock = FixedClock(utc(2023, 6, 15));
        let repo = InMemoryCatRepository::new(Arc::new(clock));
        let cat = repo.create(details("Fluffy", utc(2021, 5, 10))).await.unwrap();

        // Act
        let view = get_cat_by_id(cat.id(), &repo, &clock).await.unwrap();
        let json = serde_json::to_value(&view).unwrap();

        // Assert
        assert_eq!(json["id"], 1);
        assert_eq!(json["birthDate"], "2021-05-10T00:00:00Z");
        assert!(json["deathDate"].is_null());
        assert_eq!(json["isAlive"], true);
        assert_eq!(json["age"], 2);
    }
}
