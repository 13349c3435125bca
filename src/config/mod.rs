//! Client configuration.
//!
//! # Overview
//!
//! - [`OntraportConfig`]: credentials and connection settings
//! - [`OntraportConfigBuilder`]: builder for [`OntraportConfig`]
//! - [`AppId`], [`ApiKey`]: validated account credentials
//! - [`HostUrl`]: validated API host
//!
//! # Example
//!
//! ```rust
//! use ontraport_api::{OntraportConfig, AppId, ApiKey};
//!
//! let config = OntraportConfig::builder()
//!     .app_id(AppId::new("2_12345_abcdef").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.ontraport.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, AppId, HostUrl};

use crate::error::ConfigError;

/// Environment variable holding the app ID.
pub const APP_ID_VAR: &str = "ONTRAPORT_APP_ID";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "ONTRAPORT_API_KEY";
/// Optional environment variable overriding the API host.
pub const HOST_VAR: &str = "ONTRAPORT_HOST";

/// Configuration for an Ontraport account connection.
///
/// `OntraportConfig` is `Clone`, `Send` and `Sync` and can be shared across
/// tasks.
#[derive(Clone, Debug)]
pub struct OntraportConfig {
    app_id: AppId,
    api_key: ApiKey,
    host: HostUrl,
    tries: u32,
    user_agent_prefix: Option<String>,
}

impl OntraportConfig {
    /// Creates a new builder for constructing an `OntraportConfig`.
    #[must_use]
    pub fn builder() -> OntraportConfigBuilder {
        OntraportConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `ONTRAPORT_APP_ID` and `ONTRAPORT_API_KEY`, and
    /// `ONTRAPORT_HOST` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if a required variable is not
    /// set, or a validation error if a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let app_id = lookup(APP_ID_VAR).ok_or(ConfigError::MissingEnvVar { name: APP_ID_VAR })?;
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingEnvVar { name: API_KEY_VAR })?;

        let mut builder = Self::builder()
            .app_id(AppId::new(app_id)?)
            .api_key(ApiKey::new(api_key)?);
        if let Some(host) = lookup(HOST_VAR).filter(|host| !host.trim().is_empty()) {
            builder = builder.host(HostUrl::new(host)?);
        }
        builder.build()
    }

    /// Returns the app ID.
    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.app_id
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns how many times a request is attempted before giving up.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify OntraportConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OntraportConfig>();
};

/// Builder for constructing [`OntraportConfig`] instances.
///
/// `app_id` and `api_key` are required.
///
/// # Defaults
///
/// - `host`: `https://api.ontraport.com`
/// - `tries`: `1`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use ontraport_api::{OntraportConfig, AppId, ApiKey, HostUrl};
///
/// let config = OntraportConfig::builder()
///     .app_id(AppId::new("app").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .host(HostUrl::new("http://localhost:8080").unwrap())
///     .tries(3)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Debug, Default)]
pub struct OntraportConfigBuilder {
    app_id: Option<AppId>,
    api_key: Option<ApiKey>,
    host: Option<HostUrl>,
    tries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl OntraportConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app ID (required).
    #[must_use]
    pub fn app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets how many times a request is attempted. Values below 1 are raised to 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`OntraportConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_id` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<OntraportConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(OntraportConfig {
            app_id,
            api_key,
            host: self.host.unwrap_or_default(),
            tries: self.tries.unwrap_or(1).max(1),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
