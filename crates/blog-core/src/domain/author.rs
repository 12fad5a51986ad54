use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Allowed length of an author name, in characters.
pub const NAME_LENGTH: RangeInclusive<usize> = 2..=64;

/// Allowed author age, in years.
pub const AGE_RANGE: RangeInclusive<i64> = 1..=120;

/// Author entity - a person that posts are attributed to.
///
/// Authors are append-only: once created they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl Author {
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

/// Unvalidated input for creating an author.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub age: i64,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Check every field and report all violated constraints at once.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();

        let name_len = self.name.chars().count();
        if !NAME_LENGTH.contains(&name_len) {
            violations.push(FieldViolation::new(
                "name",
                format!(
                    "must be between {} and {} characters",
                    NAME_LENGTH.start(),
                    NAME_LENGTH.end()
                ),
            ));
        }

        if !AGE_RANGE.contains(&self.age) {
            violations.push(FieldViolation::new(
                "age",
                format!(
                    "must be between {} and {}",
                    AGE_RANGE.start(),
                    AGE_RANGE.end()
                ),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }
}

/// A single failed input constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub constraint: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        Self {
            field,
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(input: NewAuthor) -> Vec<FieldViolation> {
        match input.validate() {
            Err(DomainError::Validation(v)) => v,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_author_passes() {
        assert!(NewAuthor::new("Jo", 1).validate().is_ok());
        assert!(NewAuthor::new("x".repeat(64), 120).validate().is_ok());
    }

    #[test]
    fn test_name_bounds() {
        let v = violations(NewAuthor::new("", 30));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].field, "name");

        let v = violations(NewAuthor::new("J", 30));
        assert_eq!(v[0].field, "name");

        let v = violations(NewAuthor::new("x".repeat(65), 30));
        assert_eq!(v[0].field, "name");
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 64 two-byte characters is still within bounds
        assert!(NewAuthor::new("é".repeat(64), 30).validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(violations(NewAuthor::new("Ann", 0))[0].field, "age");
        assert_eq!(violations(NewAuthor::new("Ann", 121))[0].field, "age");
        assert_eq!(violations(NewAuthor::new("Ann", -5))[0].field, "age");
    }

    #[test]
    fn test_reports_all_violations() {
        let v = violations(NewAuthor::new("", 500));
        let fields: Vec<_> = v.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "age"]);
    }

    #[test]
    fn test_violation_display() {
        let v = FieldViolation::new("age", "must be between 1 and 120");
        assert_eq!(v.to_string(), "age must be between 1 and 120");
    }
}
