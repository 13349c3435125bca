//! Conversions between raw wire strings and typed field values.
//!
//! Ontraport transmits nearly every field as a string: numbers, dates,
//! flags and enumerations alike. A [`Converter`] defines the two-way
//! mapping between that raw string and one typed value family. Property
//! accessors are generic over a converter, so the conversion rule for a
//! field is chosen at compile time.
//!
//! # Available Converters
//!
//! - [`NumberConverter`] with the aliases [`IntConverter`], [`LongConverter`]
//!   and [`DecimalConverter`]
//! - [`StringConverter`]: identity mapping
//! - [`BoolConverter`]: `"1"` / `"0"` flags
//! - [`DateTimeConverter`]: Unix timestamps in seconds
//! - [`EnumConverter`]: enumerations declared with [`api_enum!`](crate::api_enum)
//! - [`ListConverter`]: delimited lists of another converter's values
//!
//! # Round-Trip Law
//!
//! For every value `v` the wire format can represent,
//! `C::parse(&C::render(&v)?)? == v`. Values the wire format cannot
//! represent are rejected by `render` with [`ConversionError::Render`]
//! instead of being silently altered.
//!
//! # Example
//!
//! ```rust
//! use ontraport_api::converters::{Converter, IntConverter, BoolConverter};
//!
//! assert_eq!(IntConverter::parse("-5").unwrap(), -5);
//! assert_eq!(IntConverter::render(&5).unwrap(), "5");
//! assert!(BoolConverter::parse("1").unwrap());
//! assert!(IntConverter::parse("five").is_err());
//! ```

mod boolean;
mod date;
mod enumeration;
mod list;
mod number;
mod text;

pub use boolean::BoolConverter;
pub use date::DateTimeConverter;
pub use enumeration::{ApiEnum, EnumConverter};
pub use list::{Comma, Delimiter, ListConverter, TagDelimiter};
pub use number::{DecimalConverter, IntConverter, LongConverter, NumberConverter, WireNumber};
pub use text::StringConverter;

use thiserror::Error;

/// Errors raised when a value cannot cross between its raw and typed forms.
///
/// Conversion errors are never swallowed by the accessor layer: a default
/// substituted for unreadable data could be written back to the remote
/// service on the next save.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A raw string could not be parsed into the target type.
    #[error("Cannot convert raw value '{raw}' to {target}: {reason}")]
    Parse {
        /// The raw string that failed to parse.
        raw: String,
        /// The name of the target type.
        target: &'static str,
        /// Why parsing failed.
        reason: String,
    },

    /// A typed value has no raw representation on the wire.
    #[error("Cannot render {target} value as a raw string: {reason}")]
    Render {
        /// The name of the source type.
        target: &'static str,
        /// Why rendering failed.
        reason: String,
    },
}

impl ConversionError {
    /// Creates a [`ConversionError::Parse`].
    pub fn parse(raw: impl Into<String>, target: &'static str, reason: impl ToString) -> Self {
        Self::Parse {
            raw: raw.into(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Creates a [`ConversionError::Render`].
    pub fn render(target: &'static str, reason: impl ToString) -> Self {
        Self::Render {
            target,
            reason: reason.to_string(),
        }
    }
}

/// A bidirectional mapping between raw wire strings and one value type.
///
/// Converters are zero-sized strategy types; they are never instantiated.
pub trait Converter {
    /// The typed value produced by this converter.
    ///
    /// The `Default` value is what accessors return for a field that holds
    /// no data.
    type Value: Default;

    /// Human-readable name of the value type, used in error messages.
    const NAME: &'static str;

    /// Converts a raw string into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Parse`] if `raw` is not a valid
    /// representation of the value type.
    fn parse(raw: &str) -> Result<Self::Value, ConversionError>;

    /// Converts a typed value into its raw string.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if the value cannot be
    /// represented on the wire without loss.
    fn render(value: &Self::Value) -> Result<String, ConversionError>;
}
