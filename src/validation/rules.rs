//! Reusable field-level checks.
//!
//! Each check reports at most one violation and never panics on input;
//! pattern compilation happens once at validator construction, not here.

use chrono::NaiveDate;
use regex::Regex;

use super::ValidationError;

/// Wraps a pattern so it can only match the whole string. The regex crate
/// matches substrings by default; double anchoring a pattern that already
/// carries `^`/`$` is harmless.
pub fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

/// The value must contain at least one non-whitespace character.
pub fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "REQUIRED",
            &format!("{} is required", field),
        ));
    }
    Ok(())
}

/// Character count must lie within `[min, max]` inclusive.
pub fn length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let count = value.chars().count();
    if count < min {
        return Err(ValidationError::new(
            field,
            "TOO_SHORT",
            &format!("{} must be at least {} characters", field, min),
        ));
    }
    if count > max {
        return Err(ValidationError::new(
            field,
            "TOO_LONG",
            &format!("{} must be at most {} characters", field, max),
        ));
    }
    Ok(())
}

/// The value must fully match `pattern`; compile it through [`anchored`].
pub fn full_match(field: &str, value: &str, pattern: &Regex) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        return Err(ValidationError::new(
            field,
            "INVALID_FORMAT",
            &format!("{} format is invalid", field),
        ));
    }
    Ok(())
}

/// The date must be on or before `cutoff`, at day precision.
pub fn on_or_before(
    field: &str,
    value: NaiveDate,
    cutoff: NaiveDate,
    code: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if value > cutoff {
        return Err(ValidationError::new(field, code, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("name", "John").is_ok());
        assert!(required("name", "").is_err());
        assert!(required("name", "    ").is_err());

        let err = required("name", "\t\n").unwrap_err();
        assert_eq!(err.code, "REQUIRED");
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(length("name", "abc", 3, 5).is_ok());
        assert!(length("name", "abcde", 3, 5).is_ok());
        assert_eq!(length("name", "ab", 3, 5).unwrap_err().code, "TOO_SHORT");
        assert_eq!(length("name", "abcdef", 3, 5).unwrap_err().code, "TOO_LONG");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(length("name", "åäö", 3, 3).is_ok());
    }

    #[test]
    fn test_full_match_is_anchored() {
        let pattern = Regex::new(&anchored(r"[A-Z]{2}-\d{6}")).unwrap();
        assert!(full_match("ref", "AA-000001", &pattern).is_ok());
        // a substring match is not enough
        assert!(full_match("ref", "xAA-000001", &pattern).is_err());
        assert!(full_match("ref", "AA-000001x", &pattern).is_err());
    }

    #[test]
    fn test_anchored_tolerates_existing_anchors() {
        let pattern = Regex::new(&anchored(r"^[A-Z]{2}-\d{6}$")).unwrap();
        assert!(full_match("ref", "AA-000001", &pattern).is_ok());
        assert!(full_match("ref", "AA-0000011", &pattern).is_err());
    }

    #[test]
    fn test_on_or_before() {
        let cutoff = NaiveDate::from_ymd_opt(2008, 8, 23).unwrap();
        let ok = NaiveDate::from_ymd_opt(2008, 8, 23).unwrap();
        let late = NaiveDate::from_ymd_opt(2008, 8, 24).unwrap();

        assert!(on_or_before("dob", ok, cutoff, "UNDER_MINIMUM_AGE", "too young").is_ok());
        assert!(on_or_before("dob", late, cutoff, "UNDER_MINIMUM_AGE", "too young").is_err());
    }
}
