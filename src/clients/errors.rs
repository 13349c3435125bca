//! HTTP-layer error types.
//!
//! - [`HttpResponseError`]: non-2xx responses from the API
//! - [`MaxHttpRetriesExceededError`]: retry attempts exhausted
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error over all of the above plus network failures
//!
//! # Example
//!
//! ```rust,ignore
//! use ontraport_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` holds the response body, or the status reason when the body
/// is empty.
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body or status reason.
    pub message: String,
}

/// Error returned when a request keeps failing with 429 or 500 after every
/// configured attempt.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// The message of the last response.
    pub message: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}. Use query parameters instead.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_message_includes_code() {
        let error = HttpResponseError {
            code: 400,
            message: "Invalid Contact ID".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 400: Invalid Contact ID");
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "Too Many Requests".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("Exceeded maximum retry count"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
        assert_eq!(
            InvalidHttpRequestError::EmptyPath.to_string(),
            "Request path cannot be empty."
        );
    }

    #[test]
    fn test_status_is_reported_for_response_errors() {
        let error = HttpError::from(HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
        });
        assert_eq!(error.status(), Some(404));

        let error = HttpError::from(InvalidHttpRequestError::EmptyPath);
        assert_eq!(error.status(), None);
    }
}
