//! Response wrapper for resource operations.
//!
//! [`ApiResponse<T>`] pairs the decoded envelope `data` with the metadata
//! of the HTTP response. It implements `Deref<Target = T>`, so it can be
//! used like the inner value:
//!
//! ```rust,ignore
//! let rules = ApiRule::select_multiple(&client, None).await?;
//!
//! for rule in rules.iter() {
//!     println!("{}", rule.name().raw_value());
//! }
//!
//! if let Some(limit) = rules.rate_limit() {
//!     println!("{} requests left", limit.remaining);
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::api::ApiError;
use crate::clients::{HttpResponse, RateLimit};

/// The decoded result of a resource operation.
///
/// # Example
///
/// ```rust
/// use ontraport_api::api::ApiResponse;
///
/// let response = ApiResponse::new(vec![1, 2, 3], None, Some("12345".to_string()));
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.account_id(), Some("12345"));
/// assert_eq!(response.into_inner(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    data: T,
    rate_limit: Option<RateLimit>,
    account_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a new `ApiResponse`.
    #[must_use]
    pub const fn new(data: T, rate_limit: Option<RateLimit>, account_id: Option<String>) -> Self {
        Self {
            data,
            rate_limit,
            account_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the rate limit state reported with the response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the account ID reported in the envelope.
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Maps the inner data, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            rate_limit: self.rate_limit,
            account_id: self.account_id,
        }
    }
}

impl ApiResponse<()> {
    /// Splits an HTTP response into its metadata and envelope `data`.
    pub(crate) fn split(response: HttpResponse) -> (Self, serde_json::Value) {
        let meta = Self::new((), response.rate_limit, response.account_id());
        (meta, response.into_data())
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes the envelope `data` of an HTTP response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if `data` does not decode
    /// as `T`.
    pub fn from_http_response(response: HttpResponse, resource: &'static str) -> Result<Self, ApiError> {
        let (meta, data) = ApiResponse::split(response);
        let data: T =
            serde_json::from_value(data).map_err(|e| ApiError::unexpected(resource, e))?;
        Ok(meta.map(|()| data))
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ApiResponse is Send + Sync when T is
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiResponse<Vec<String>>>();
};
