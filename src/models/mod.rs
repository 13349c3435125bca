//! Typed records over raw Ontraport data.
//!
//! Every record wraps one [`ApiObject`] data bag holding the raw values the
//! service sent. Typed reads and writes go through property accessors that
//! convert on each access, so the bag always reflects what will be sent
//! back on the next save.
//!
//! # Overview
//!
//! - [`ApiObject`]: the untyped data bag
//! - [`ApiProperty`] / [`ApiPropertyMut`]: typed read and write views of one key
//! - [`Field`]: a compile-time key descriptor that binds to a bag
//! - [`ApiRecord`]: the trait implemented by records declared with
//!   [`api_object!`](crate::api_object)
//! - [`ApiRule`], [`ApiContact`]: resource records
//! - [`ApiSearchOptions`]: selection and paging for collection requests
//! - [`ResponseMetadata`], [`ResponseCollectionInfo`]: schema and collection summaries

mod api_object;
mod contact;
mod macros;
mod metadata;
mod property;
mod rule;
mod search;

pub use api_object::{is_custom_field_key, ApiObject, ApiRecord, Iter};
pub use contact::{ApiContact, BulkMailStatus, BulkSmsStatus};
pub use metadata::{ApiFieldMetadata, ResponseCollectionInfo, ResponseMetadata};
pub use property::{ApiProperty, ApiPropertyBase, ApiPropertyMut, Field};
pub use rule::ApiRule;
pub use search::{ApiSearchOptions, SortDirection, MAX_RANGE};
