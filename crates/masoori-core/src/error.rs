//! Error types for Masoori

use thiserror::Error;

/// Main error type for Masoori operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Request could not be sent or the response body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The requested card does not exist
    #[error("Card not found: {0}")]
    NotFound(String),

    /// Response body was not valid card JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration values were rejected before any request was made
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CoreError::Timeout(err.to_string())
        } else {
            CoreError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::NotFound("consume 4".to_string());
        assert_eq!(format!("{}", err), "Card not found: consume 4");

        let err = CoreError::Status {
            status: 500,
            url: "http://localhost:8080/api/card/basic/4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 500 from http://localhost:8080/api/card/basic/4"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Decode(_)));
    }
}
