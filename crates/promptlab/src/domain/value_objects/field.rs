//! Field constraints shared by entity validation
//!
//! Lengths count characters, not bytes.

use crate::domain::errors::DomainError;

/// Require `value` to hold between `min` and `max` characters (no upper bound if `None`)
pub fn require_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::validation(
            field,
            format!("must have at least {} character(s)", min),
        ));
    }
    if let Some(max) = max {
        if len > max {
            return Err(DomainError::validation(
                field,
                format!("must have at most {} characters", max),
            ));
        }
    }
    Ok(())
}

/// Optional variant of [`require_length`]; `None` always passes
pub fn limit_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), DomainError> {
    match value {
        Some(v) => require_length(field, v, 0, Some(max)),
        None => Ok(()),
    }
}

/// Treat an empty reference as "no reference"
pub fn normalize_reference(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
