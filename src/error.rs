//! Lookup errors shared by the query layer, the resolver and the HTTP API.

use thiserror::Error;

/// Failure of a read operation against the knowledge store.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Malformed or out-of-range input: a number outside its entity's
    /// domain, a missing query parameter, an unknown enumeration value.
    #[error("{message}")]
    Validation { message: String },

    /// Well-formed key that matched no record.
    #[error("{message}")]
    NotFound {
        message: String,
        suggestion: Option<String>,
    },

    /// Store unavailable or otherwise unexpected failure.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl LookupError {
    pub fn validation(message: impl Into<String>) -> Self {
        LookupError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        LookupError::NotFound {
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn not_found_with(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        LookupError::NotFound {
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

impl From<sqlx::Error> for LookupError {
    fn from(err: sqlx::Error) -> Self {
        LookupError::Internal(err.into())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Internal(err.into())
    }
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = LookupError::not_found_with("Planet \"Pluto\" not found", "Valid planets: Sun");
        assert_eq!(err.to_string(), "Planet \"Pluto\" not found");
    }

    #[test]
    fn test_sqlx_errors_are_internal() {
        let err: LookupError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, LookupError::Internal(_)));
    }
}
