//! Domain-level error types.

use std::fmt;

use thiserror::Error;

use crate::domain::FieldViolation;

/// Kind of entity a lookup was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Author,
    Post,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Author => write!(f, "Author"),
            EntityKind::Post => write!(f, "Post"),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: EntityKind, id: i64 },

    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("No changes")]
    NoChanges,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn author_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Author,
            id,
        }
    }

    pub fn post_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: EntityKind::Post,
            id,
        }
    }
}

pub(crate) fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DomainError::post_not_found(9).to_string(), "Post not found");
        assert_eq!(
            DomainError::author_not_found(9).to_string(),
            "Author not found"
        );
        assert_eq!(DomainError::NoChanges.to_string(), "No changes");

        let err = DomainError::Validation(vec![
            FieldViolation::new("name", "is too short"),
            FieldViolation::new("age", "is too high"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name is too short, age is too high"
        );
    }
}
