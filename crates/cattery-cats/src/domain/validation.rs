//! Field rules for cats.
//!
//! Each rule is a small function that either passes or yields the message of
//! the rule it violates. [`validate_details`] runs all of them and collects
//! every violation rather than stopping at the first.

use chrono::{DateTime, Utc};

use super::entities::CatDetails;

/// Violation reported for an empty or whitespace-only name.
pub const NAME_REQUIRED: &str = "Name must not be empty";
/// Violation reported for an empty or whitespace-only breed.
pub const BREED_REQUIRED: &str = "Breed must not be empty";
/// Violation reported when the birth date is not strictly before now.
pub const BIRTH_DATE_IN_PAST: &str = "Birth date must be in the past";
/// Violation reported when the death date is not strictly after the birth date.
pub const DEATH_AFTER_BIRTH: &str = "Death date must be after birth date";

fn require_text(value: &str, rule: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(rule)
}

fn require_past(birth_date: DateTime<Utc>, now: DateTime<Utc>) -> Option<&'static str> {
    (birth_date >= now).then_some(BIRTH_DATE_IN_PAST)
}

fn require_after_birth(
    birth_date: DateTime<Utc>,
    death_date: Option<DateTime<Utc>>,
) -> Option<&'static str> {
    death_date
        .filter(|death| *death <= birth_date)
        .map(|_| DEATH_AFTER_BIRTH)
}

/// Checks `details` against every cat rule as of `now`.
///
/// On success returns the details with `name` and `breed` trimmed.
///
/// # Errors
///
/// Returns the messages of all violated rules, in field order.
pub fn validate_details(
    details: CatDetails,
    now: DateTime<Utc>,
) -> Result<CatDetails, Vec<String>> {
    let violations: Vec<String> = [
        require_text(&details.name, NAME_REQUIRED),
        require_text(&details.breed, BREED_REQUIRED),
        require_past(details.birth_date, now),
        require_after_birth(details.birth_date, details.death_date),
    ]
    .into_iter()
    .flatten()
    .map(str::to_owned)
    .collect();

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(CatDetails {
        name: details.name.trim().to_owned(),
        breed: details.breed.trim().to_owned(),
        ..details
    })
}
