//! Error types for calls into the messaging platform.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by a [`Platform`](crate::Platform) implementation.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The platform rejected the request.
    #[error("API error: {0}")]
    Api(String),

    /// The request never reached the platform or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// The platform asked the client to wait before the next request.
    #[error("Rate limited, retry after {}s", .0.as_secs())]
    RetryAfter(Duration),

    /// The platform answered with something that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl PlatformError {
    /// Returns the wait the platform imposed, if this is a rate-limit error.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            PlatformError::RetryAfter(wait) => Some(*wait),
            _ => None,
        }
    }
}

/// Result type for platform operations.
pub type PlatformResult<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_display() {
        let err = PlatformError::Api("Bad Request: chat not found".into());
        assert_eq!(err.to_string(), "API error: Bad Request: chat not found");

        let err = PlatformError::RetryAfter(Duration::from_secs(7));
        assert_eq!(err.to_string(), "Rate limited, retry after 7s");
    }

    #[test]
    fn test_retry_after() {
        assert_eq!(
            PlatformError::RetryAfter(Duration::from_secs(3)).retry_after(),
            Some(Duration::from_secs(3))
        );
        assert_eq!(PlatformError::Network("reset".into()).retry_after(), None);
    }
}
