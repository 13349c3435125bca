//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so
//! invalid credentials are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use ontraport_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App ID cannot be empty.
    #[error("App ID cannot be empty. Please provide the Api-Appid of your Ontraport account.")]
    EmptyAppId,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Ontraport API key.")]
    EmptyApiKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.ontraport.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}
