//! Error types for resource operations.
//!
//! HTTP failures are mapped to semantic variants where one exists:
//!
//! - **404**: [`ApiError::NotFound`]
//! - **envelope `code` other than 0**: [`ApiError::Remote`]
//! - **anything else**: [`ApiError::Http`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ontraport_api::api::{ApiError, OntraportResource};
//! use ontraport_api::models::ApiRule;
//!
//! match ApiRule::select(&client, 42).await {
//!     Ok(rule) => println!("Found rule {:?}", rule.name().value()),
//!     Err(ApiError::NotFound { resource, id }) => println!("{resource} {id} does not exist"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::converters::ConversionError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The record does not exist.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource name (e.g., "Rule").
        resource: &'static str,
        /// The requested ID.
        id: String,
    },

    /// The service answered with a non-zero envelope code.
    #[error("{resource} request failed with code {code}: {message}")]
    Remote {
        /// The resource name.
        resource: &'static str,
        /// The envelope code.
        code: i64,
        /// The message reported by the service, if any.
        message: String,
    },

    /// A bulk operation was requested without selecting any records.
    #[error("Refusing to run {operation} on {resource} without ids, group ids, a condition, a search or perform_all")]
    MissingSelection {
        /// The resource name.
        resource: &'static str,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// The record has no `id` value, so it cannot be updated.
    #[error("{resource} has no id; create it before updating")]
    MissingId {
        /// The resource name.
        resource: &'static str,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected {resource} response: {message}")]
    UnexpectedResponse {
        /// The resource name.
        resource: &'static str,
        /// What was wrong with the response.
        message: String,
    },

    /// A field value could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ApiError {
    /// Maps an HTTP error for a request on `resource`.
    ///
    /// A 404 becomes [`ApiError::NotFound`]; everything else is wrapped.
    #[must_use]
    pub fn from_http_error(error: HttpError, resource: &'static str, id: Option<&str>) -> Self {
        match error.status() {
            Some(404) => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            _ => Self::Http(error),
        }
    }

    /// Creates an [`ApiError::UnexpectedResponse`].
    pub fn unexpected(resource: &'static str, message: impl ToString) -> Self {
        Self::UnexpectedResponse {
            resource,
            message: message.to_string(),
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
