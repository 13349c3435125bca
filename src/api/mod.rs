//! Resource operations against the Ontraport REST API.
//!
//! # Overview
//!
//! - [`OntraportResource`]: select records, read the schema and collection info
//! - [`DeletableResource`]: delete one record or a selection
//! - [`WritableResource`]: create and update records
//! - [`ApiResponse`]: decoded data plus rate limit and account metadata
//! - [`ApiError`]: errors for all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use ontraport_api::{HttpClient, OntraportConfig};
//! use ontraport_api::api::{OntraportResource, WritableResource};
//! use ontraport_api::models::{ApiPropertyBase, ApiRule};
//!
//! let client = HttpClient::new(&OntraportConfig::from_env()?);
//!
//! let mut rule = ApiRule::select(&client, 1).await?.into_inner();
//! rule.pause_mut().set_value(true)?;
//! rule.update(&client).await?;
//! ```

mod errors;
mod resource;
mod response;

pub use errors::ApiError;
pub use resource::{DeletableResource, OntraportResource, WritableResource};
pub use response::ApiResponse;
