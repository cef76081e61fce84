//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {field} {constraint}")]
    Validation {
        field: &'static str,
        constraint: String,
    },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid {entity_type} reference: {id}")]
    InvalidReference { entity_type: String, id: String },

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_reference<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::InvalidReference {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: &'static str, constraint: impl Into<String>) -> Self {
        Self::Validation {
            field,
            constraint: constraint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_and_lookup_messages_differ() {
        let missing = DomainError::not_found("Collection", "c1");
        let dangling = DomainError::invalid_reference("Collection", "c1");

        assert_eq!(missing.to_string(), "Collection not found: c1");
        assert_eq!(dangling.to_string(), "Invalid Collection reference: c1");
    }
}
