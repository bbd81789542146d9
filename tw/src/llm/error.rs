//! LLM error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM operations
///
/// Every transport, authentication, rate-limit, or service failure is
/// translated into one of these variants at the client boundary; nothing
/// else escapes the gateway.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }

    /// HTTP status code, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LlmError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rate_limit() {
        let err = LlmError::RateLimited {
            retry_after: Duration::from_secs(60),
        };
        assert!(err.is_rate_limit());

        let err = LlmError::ApiError {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_status() {
        let err = LlmError::ApiError {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.status(), Some(401));

        assert_eq!(LlmError::InvalidResponse("bad".to_string()).status(), None);
    }

    #[test]
    fn test_display() {
        let err = LlmError::ApiError {
            status: 429,
            message: "slow down".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: slow down");
    }
}
