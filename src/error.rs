//! Error types for refetch
//!
//! This module provides the failure taxonomy for the library:
//! - Transport failures surfaced by the underlying HTTP client
//! - Status failures (completed responses with a non-success status code)
//! - Request-construction failures for configuration values the transport
//!   layer rejects
//!
//! Every failure is caught inside the request-execution routine and converted
//! into the `error` field of [`RequestState`](crate::RequestState) via its
//! `Display` text; nothing is propagated past the utility boundary.

use thiserror::Error;

/// Result type alias for refetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Main error type for refetch
///
/// Consumers never receive this type directly — the execution routine folds
/// it into the free-text `error` state field — but the variants document the
/// failure causes and their message formats.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete at the network level (connectivity
    /// failure, DNS failure, body read failure, JSON decode failure).
    ///
    /// Transparent: the surfaced message is the underlying failure's own text.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The request completed but the response status signals failure.
    ///
    /// The message embeds the numeric status code and status text, e.g.
    /// `Error 404: Not Found`.
    #[error("Error {code}: {reason}")]
    Status {
        /// Numeric HTTP status code
        code: u16,
        /// Status text from the response status line
        reason: String,
    },

    /// The configured HTTP method is not a valid method token
    #[error("configuration error: invalid HTTP method '{method}'")]
    InvalidMethod {
        /// The offending method string
        method: String,
    },

    /// A configured header name or value is not valid on the wire
    #[error("configuration error: invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name
        name: String,
    },
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_embeds_code_and_reason() {
        let err = FetchError::Status {
            code: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Error 404: Not Found");
    }

    #[test]
    fn status_error_message_for_server_errors() {
        let err = FetchError::Status {
            code: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Error 503: Service Unavailable");
    }

    #[test]
    fn invalid_method_message_names_the_method() {
        let err = FetchError::InvalidMethod {
            method: "G E T".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: invalid HTTP method 'G E T'"
        );
    }

    #[test]
    fn invalid_header_message_names_the_header() {
        let err = FetchError::InvalidHeader {
            name: "X Bad Name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: invalid header 'X Bad Name'"
        );
    }
}
