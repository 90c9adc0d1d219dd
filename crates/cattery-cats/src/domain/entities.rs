//! The `Cat` entity.

use cattery_core::clock::Clock;
use cattery_core::error::DomainError;
use cattery_core::id::CatId;
use chrono::{DateTime, Datelike, Utc};

use super::validation::validate_details;

/// The descriptive fields of a cat, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatDetails {
    /// The cat's name.
    pub name: String,
    /// The cat's breed.
    pub breed: String,
    /// When the cat was born.
    pub birth_date: DateTime<Utc>,
    /// When the cat died, if it has.
    pub death_date: Option<DateTime<Utc>>,
}

/// A partial set of field changes applied by an update. `None` leaves the
/// stored value as it is; the identifier is not among the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatChanges {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement breed.
    pub breed: Option<String>,
    /// Replacement birth date.
    pub birth_date: Option<DateTime<Utc>>,
    /// Replacement death date.
    pub death_date: Option<DateTime<Utc>>,
}

/// A registered cat.
///
/// Fields are private so a `Cat` can only come out of [`Cat::new`] or
/// [`Cat::with_changes`], both of which enforce the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    id: CatId,
    name: String,
    breed: String,
    birth_date: DateTime<Utc>,
    death_date: Option<DateTime<Utc>>,
}

impl Cat {
    /// Builds a cat with the given identifier, validating `details` against
    /// the current time read from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CatInvalid` listing every violated rule.
    pub fn new(id: CatId, details: CatDetails, clock: &dyn Clock) -> Result<Self, DomainError> {
        let details = validate_details(details, clock.now()).map_err(DomainError::CatInvalid)?;
        Ok(Self {
            id,
            name: details.name,
            breed: details.breed,
            birth_date: details.birth_date,
            death_date: details.death_date,
        })
    }

    /// Returns a copy of this cat with `changes` merged over its fields. The
    /// identifier is always carried over and the merged result is validated
    /// in full.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CatInvalid` if the merged cat breaks a rule.
    pub fn with_changes(
        &self,
        changes: &CatChanges,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let merged = CatDetails {
            name: changes.name.clone().unwrap_or_else(|| self.name.clone()),
            breed: changes.breed.clone().unwrap_or_else(|| self.breed.clone()),
            birth_date: changes.birth_date.unwrap_or(self.birth_date),
            death_date: changes.death_date.or(self.death_date),
        };
        Self::new(self.id, merged, clock)
    }

    /// The cat's identifier.
    #[must_use]
    pub fn id(&self) -> CatId {
        self.id
    }

    /// The cat's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cat's breed.
    #[must_use]
    pub fn breed(&self) -> &str {
        &self.breed
    }

    /// When the cat was born.
    #[must_use]
    pub fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    /// When the cat died, if it has.
    #[must_use]
    pub fn death_date(&self) -> Option<DateTime<Utc>> {
        self.death_date
    }

    /// Returns `true` while no death date is recorded.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.death_date.is_none()
    }

    /// Whole years the cat had lived as of `date`.
    ///
    /// Ages stop at the death date and never go negative. Calendar fields
    /// are compared in UTC, and a birthday counts as reached once the
    /// (month, day) of `date` is not before the (month, day) of birth, so a
    /// February 29th cat turns a year older on March 1st in common years.
    #[must_use]
    pub fn age_at(&self, date: DateTime<Utc>) -> u32 {
        let effective = match self.death_date {
            Some(death) if date > death => death,
            _ => date,
        };
        if effective < self.birth_date {
            return 0;
        }

        let birth = self.birth_date;
        let mut years = effective.year() - birth.year();
        if (effective.month(), effective.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }

    /// The cat's age as of the current time.
    #[must_use]
    pub fn age(&self, clock: &dyn Clock) -> u32 {
        self.age_at(clock.now())
    }
}
