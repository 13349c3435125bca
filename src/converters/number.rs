//! Numeric converters.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use super::{ConversionError, Converter};

/// A numeric type that can travel as decimal text.
///
/// Implemented for the integer and floating point types used by Ontraport
/// fields.
pub trait WireNumber: FromStr + Display + Default {
    /// Name used in conversion error messages.
    const NAME: &'static str;

    /// Returns `false` for values that have no finite decimal form.
    fn is_representable(&self) -> bool {
        true
    }
}

macro_rules! impl_wire_integer {
    ($($ty:ty),+) => {
        $(
            impl WireNumber for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

impl_wire_integer!(i32, i64, u32, u64);

impl WireNumber for f64 {
    const NAME: &'static str = "f64";

    fn is_representable(&self) -> bool {
        self.is_finite()
    }
}

/// Converts between decimal text and a [`WireNumber`].
///
/// Surrounding whitespace is ignored when parsing. Integers outside the
/// target range and non-finite floats are errors in both directions.
///
/// # Example
///
/// ```rust
/// use ontraport_api::converters::{Converter, IntConverter, DecimalConverter};
///
/// assert_eq!(IntConverter::parse("0").unwrap(), 0);
/// assert_eq!(DecimalConverter::render(&12.5).unwrap(), "12.5");
/// assert!(IntConverter::parse("99999999999").is_err());
/// ```
#[derive(Debug)]
pub struct NumberConverter<T>(PhantomData<T>);

/// 32-bit integer fields.
pub type IntConverter = NumberConverter<i32>;

/// 64-bit integer fields, used for identifiers and counters.
pub type LongConverter = NumberConverter<i64>;

/// Decimal fields such as amounts spent.
pub type DecimalConverter = NumberConverter<f64>;

impl<T> Converter for NumberConverter<T>
where
    T: WireNumber,
    <T as FromStr>::Err: Display,
{
    type Value = T;
    const NAME: &'static str = T::NAME;

    fn parse(raw: &str) -> Result<T, ConversionError> {
        let value: T = raw
            .trim()
            .parse()
            .map_err(|e| ConversionError::parse(raw, T::NAME, e))?;
        if !value.is_representable() {
            return Err(ConversionError::parse(
                raw,
                T::NAME,
                "value is not a finite number",
            ));
        }
        Ok(value)
    }

    fn render(value: &T) -> Result<String, ConversionError> {
        if !value.is_representable() {
            return Err(ConversionError::render(
                T::NAME,
                format!("{value} is not a finite number"),
            ));
        }
        Ok(value.to_string())
    }
}
