//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a built
//! [`OntraportConfig`](super::OntraportConfig) never carries empty
//! credentials or a malformed host.

use crate::error::ConfigError;
use std::fmt;

/// A validated Ontraport application ID, sent as the `Api-Appid` header.
///
/// # Example
///
/// ```rust
/// use ontraport_api::AppId;
///
/// let app_id = AppId::new("2_12345_abcdef").unwrap();
/// assert_eq!(app_id.as_ref(), "2_12345_abcdef");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated app ID.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the ID is empty.
    pub fn new(app_id: impl Into<String>) -> Result<Self, ConfigError> {
        let app_id = app_id.into().trim().to_string();
        if app_id.is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(app_id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Ontraport API key, sent as the `Api-Key` header.
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`, so it never reaches logs.
///
/// # Example
///
/// ```rust
/// use ontraport_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated URL of the Ontraport API host.
///
/// The URL must have a scheme and a host. A trailing slash is removed so
/// request paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use ontraport_api::HostUrl;
///
/// let url = HostUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl HostUrl {
    /// The public Ontraport API host.
    pub const DEFAULT: &'static str = "https://api.ontraport.com";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl Default for HostUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_id_rejects_blank_string() {
        assert!(matches!(AppId::new(""), Err(ConfigError::EmptyAppId)));
        assert!(matches!(AppId::new("   "), Err(ConfigError::EmptyAppId)));
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://api.ontraport.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "api.ontraport.com");

        let url = HostUrl::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:3000");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("api.ontraport.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
    }

    #[test]
    fn test_default_host_matches_parsed_default() {
        assert_eq!(HostUrl::default(), HostUrl::new(HostUrl::DEFAULT).unwrap());
    }
}
