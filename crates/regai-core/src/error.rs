//! Error types for the RegAI advisor client

use thiserror::Error;

/// Main error type for RegAI operations
#[derive(Error, Debug)]
pub enum RegaiError {
    /// Registration, sign-in or sign-out was refused by the identity provider
    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    /// The plan endpoint answered but did not produce a plan
    #[error("Plan request failed: {0}")]
    PlanRequestFailure(String),

    /// An advisor endpoint answered `success: false`
    #[error("Advisor rejected request: {0}")]
    Rejected(String),

    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration could not be read or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RegaiError {
    fn from(err: serde_json::Error) -> Self {
        RegaiError::Decode(err.to_string())
    }
}

/// Result type alias using RegaiError
pub type RegaiResult<T> = Result<T, RegaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegaiError::PlanRequestFailure("bad input".to_string());
        assert_eq!(format!("{}", err), "Plan request failed: bad input");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
        let err: RegaiError = io_err.into();
        assert!(matches!(err, RegaiError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RegaiError = json_err.into();
        assert!(matches!(err, RegaiError::Decode(_)));
    }
}
