// src/error.rs
//! Error types for the recipe store

use crate::recipe::RecipeId;
use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the recipe store and its request boundary
///
/// Every variant renders a human-readable message that names the thing the
/// client got wrong: validation failures carry the offending field name,
/// lookup failures carry the requested id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No recipe with the requested id exists
    #[error("recipe not found: id={0}")]
    NotFound(String),

    /// A replace was addressed to one id but carried another in its body
    #[error("recipe id mismatch: path={path}, body={body}")]
    IdMismatch { path: RecipeId, body: RecipeId },

    /// A required field is absent from the request body
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but has the wrong shape
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

impl Error {
    /// Not-found error from any id representation
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound(id.to_string())
    }

    /// Wire-level classification used in error response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "not_found",
            Error::IdMismatch { .. } | Error::MissingField(_) | Error::InvalidField { .. } => {
                "validation"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_field() {
        assert!(Error::MissingField("name").to_string().contains("name"));
        assert!(
            Error::InvalidField {
                field: "ingredients",
                reason: "must be an array of strings",
            }
            .to_string()
            .contains("ingredients")
        );
    }

    #[test]
    fn test_not_found_names_the_id() {
        let err = Error::not_found(42);
        assert_eq!(err.to_string(), "recipe not found: id=42");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::not_found(1).kind(), "not_found");
        assert_eq!(Error::MissingField("name").kind(), "validation");
        assert_eq!(Error::IdMismatch { path: 1, body: 2 }.kind(), "validation");
    }
}
