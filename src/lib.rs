//! # Ontraport API Rust Client
//!
//! A typed Rust client for the Ontraport REST API.
//!
//! ## Overview
//!
//! Ontraport sends nearly every field as a string. This crate keeps each
//! record's raw values in an untyped data bag ([`ApiObject`]) and exposes
//! typed views of individual keys through property accessors. Conversions
//! happen on every read and write, so the bag always holds exactly what
//! the service sent or will be sent.
//!
//! - [`converters`]: two-way mappings between raw strings and typed values
//! - [`models`]: the data bag, property accessors, and resource records
//! - [`api`]: resource operations (select, create, update, delete)
//! - [`clients`]: the authenticated HTTP client with retry handling
//! - [`config`]: account configuration with validated credentials
//!
//! ## Quick Start
//!
//! ```rust
//! use ontraport_api::models::{ApiPropertyBase, ApiRule};
//!
//! let mut rule: ApiRule = serde_json::from_str(r#"{"id": "7", "pause": "0"}"#).unwrap();
//!
//! assert_eq!(rule.id().value().unwrap(), 7);
//! assert!(!rule.pause().value().unwrap());
//!
//! rule.pause_mut().set_value(true).unwrap();
//! assert_eq!(rule.pause().raw_value(), "1");
//! ```
//!
//! ## Talking to the API
//!
//! ```rust,ignore
//! use ontraport_api::{HttpClient, OntraportConfig};
//! use ontraport_api::api::OntraportResource;
//! use ontraport_api::models::{ApiContact, ApiSearchOptions};
//!
//! let config = OntraportConfig::from_env()?;
//! let client = HttpClient::new(&config);
//!
//! let options = ApiSearchOptions::new().search("jane").range(10);
//! let contacts = ApiContact::select_multiple(&client, Some(&options)).await?;
//! for contact in contacts.iter() {
//!     println!("{}", contact.email().raw_value());
//! }
//! ```
//!
//! ## Declaring Records
//!
//! Object types not shipped with the crate are declared with
//! [`api_object!`]; see its documentation for the generated items.

pub mod api;
pub mod clients;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;

#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, AppId, HostUrl, OntraportConfig, OntraportConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RateLimit,
};

pub use api::{ApiError, ApiResponse, DeletableResource, OntraportResource, WritableResource};
pub use converters::{ConversionError, Converter};
pub use models::{ApiObject, ApiProperty, ApiPropertyBase, ApiPropertyMut, ApiRecord, Field};
