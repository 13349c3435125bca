use std::marker::PhantomData;

use super::{ConversionError, Converter};

/// An enumeration whose variants travel as fixed raw codes.
///
/// Implement this with the [`api_enum!`](crate::api_enum) macro rather than
/// by hand.
pub trait ApiEnum: Sized + Default {
    /// Name used in conversion error messages.
    const NAME: &'static str;

    /// Returns the variant for a raw code, or `None` if the code is unknown.
    fn from_raw(raw: &str) -> Option<Self>;

    /// Returns the raw code for this variant.
    fn as_raw(&self) -> &'static str;
}

/// Converts enumeration fields declared with [`api_enum!`](crate::api_enum).
///
/// Unknown raw codes are parse errors.
#[derive(Debug)]
pub struct EnumConverter<E>(PhantomData<E>);

impl<E: ApiEnum> Converter for EnumConverter<E> {
    type Value = E;
    const NAME: &'static str = E::NAME;

    fn parse(raw: &str) -> Result<E, ConversionError> {
        E::from_raw(raw.trim())
            .ok_or_else(|| ConversionError::parse(raw, E::NAME, "unknown enumeration code"))
    }

    fn render(value: &E) -> Result<String, ConversionError> {
        Ok(value.as_raw().to_string())
    }
}

/// Declares an enumeration with one raw wire code per variant.
///
/// The generated type implements [`ApiEnum`], `Default` (the variant marked
/// `#[default]`), `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`.
///
/// # Example
///
/// ```rust
/// use ontraport_api::api_enum;
/// use ontraport_api::converters::{Converter, EnumConverter};
///
/// api_enum! {
///     /// Whether a rule is running.
///     pub enum RuleState {
///         #[default]
///         Active = "0",
///         Paused = "1",
///     }
/// }
///
/// assert_eq!(EnumConverter::<RuleState>::parse("1").unwrap(), RuleState::Paused);
/// assert_eq!(EnumConverter::<RuleState>::render(&RuleState::Active).unwrap(), "0");
/// ```
#[macro_export]
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $raw:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::converters::ApiEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_raw(raw: &str) -> Option<Self> {
                match raw {
                    $($raw => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_raw(&self) -> &'static str {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }
        }
    };
}
