//! Vendor client error types.

use ghost_engine::CollaboratorError;
use thiserror::Error;

/// Errors that can occur when calling a vendor API.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport error, including client-side timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The vendor returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the vendor.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The vendor returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a vendor response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A required credential or setting is missing.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The vendor answered with no usable content.
    #[error("empty response")]
    EmptyResponse,
}

impl From<ProviderError> for CollaboratorError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Parse(message) => Self::InvalidResponse(message),
            ProviderError::EmptyResponse => Self::InvalidResponse("empty response".into()),
            other => Self::Failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_become_invalid_responses() {
        let err: CollaboratorError = ProviderError::Parse("not json".into()).into();
        assert!(matches!(err, CollaboratorError::InvalidResponse(m) if m == "not json"));

        let err: CollaboratorError = ProviderError::EmptyResponse.into();
        assert!(matches!(err, CollaboratorError::InvalidResponse(_)));
    }

    #[test]
    fn api_errors_become_failures() {
        let err: CollaboratorError = ProviderError::Api {
            status: 401,
            message: "bad key".into(),
        }
        .into();
        assert_eq!(err.to_string(), "request failed: API error (401): bad key");
    }
}
