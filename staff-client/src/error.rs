//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Problem document returned by the backend
    #[error("API error {status}: {title}")]
    Api {
        status: u16,
        title: String,
        detail: Option<String>,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Update requested for an entity that was never persisted
    #[error("{0} has no identifier")]
    MissingIdentifier(&'static str),
}

impl ClientError {
    /// Whether the backend reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Api { status, .. } => *status == 404,
            Self::Http(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(ClientError::NotFound("employee 3".into()).is_not_found());
        assert!(
            ClientError::Api {
                status: 404,
                title: "Not Found".into(),
                detail: None,
            }
            .is_not_found()
        );
        assert!(!ClientError::Validation("idnull".into()).is_not_found());
        assert!(!ClientError::MissingIdentifier("Employee").is_not_found());
    }

    #[test]
    fn test_display() {
        let err = ClientError::MissingIdentifier("Employee");
        assert_eq!(err.to_string(), "Employee has no identifier");
    }
}
