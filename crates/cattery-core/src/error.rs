//! Domain error types.

use thiserror::Error;

use crate::id::CatId;

/// Failures returned by cat operations.
///
/// The two variants are kept distinct so the HTTP layer can tell a lookup
/// miss (404) from a rejected payload (400).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No stored cat has the given identifier.
    #[error("cat not found: {0}")]
    CatNotFound(CatId),

    /// The cat's fields violate one or more invariants. Each entry names a
    /// violated rule.
    #[error("invalid cat: {}", .0.join("; "))]
    CatInvalid(Vec<String>),
}

impl DomainError {
    /// Returns the violated rules for `CatInvalid`, or an empty slice.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::CatInvalid(rules) => rules,
            Self::CatNotFound(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_not_found_message_includes_id() {
        let err = DomainError::CatNotFound(CatId::new(3));
        assert_eq!(err.to_string(), "cat not found: 3");
    }

    #[test]
    fn test_cat_invalid_message_joins_rules() {
        let err = DomainError::CatInvalid(vec![
            "Name must not be empty".to_owned(),
            "Birth date must be in the past".to_owned(),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid cat: Name must not be empty; Birth date must be in the past"
        );
        assert_eq!(err.violations().len(), 2);
    }
}
