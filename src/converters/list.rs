use std::marker::PhantomData;

use super::{ConversionError, Converter};

/// Separator between list elements on the wire.
pub trait Delimiter {
    /// The separator text.
    const DELIMITER: &'static str;

    /// Whether a non-empty list also starts and ends with the separator.
    const WRAPPED: bool = false;
}

/// Plain comma separator, the default for list fields.
#[derive(Debug)]
pub struct Comma;

impl Delimiter for Comma {
    const DELIMITER: &'static str = ",";
}

/// The `*/*` separator used by tag and sequence membership fields.
///
/// Non-empty lists are written wrapped (`*/*3*/*7*/*`), the same form the
/// service returns.
#[derive(Debug)]
pub struct TagDelimiter;

impl Delimiter for TagDelimiter {
    const DELIMITER: &'static str = "*/*";
    const WRAPPED: bool = true;
}

/// Converts delimited lists, delegating each element to `C`.
///
/// Empty segments are skipped when parsing, so `""`, `"1,,2,"` and the
/// wrapped form `"*/*1*/*2*/*"` are all valid. An element whose raw form is
/// empty, or that would split differently once joined with its neighbours,
/// cannot be rendered without changing the list, and is rejected.
///
/// # Example
///
/// ```rust
/// use ontraport_api::converters::{Converter, IntConverter, ListConverter, TagDelimiter};
///
/// type Ids = ListConverter<IntConverter>;
/// type Tags = ListConverter<IntConverter, TagDelimiter>;
///
/// assert_eq!(Ids::parse("3,1,2").unwrap(), vec![3, 1, 2]);
/// assert_eq!(Ids::render(&vec![4, 5]).unwrap(), "4,5");
/// assert!(Ids::parse("").unwrap().is_empty());
/// assert_eq!(Tags::parse("*/*1*/*2*/*").unwrap(), vec![1, 2]);
/// assert_eq!(Tags::render(&vec![1, 2]).unwrap(), "*/*1*/*2*/*");
/// ```
#[derive(Debug)]
pub struct ListConverter<C, D = Comma>(PhantomData<(C, D)>);

impl<C: Converter, D: Delimiter> Converter for ListConverter<C, D> {
    type Value = Vec<C::Value>;
    const NAME: &'static str = "list";

    fn parse(raw: &str) -> Result<Vec<C::Value>, ConversionError> {
        raw.split(D::DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
            .map(C::parse)
            .collect()
    }

    fn render(value: &Vec<C::Value>) -> Result<String, ConversionError> {
        let mut parts = Vec::with_capacity(value.len());
        for item in value {
            let raw = C::render(item)?;
            if raw.trim().is_empty() || raw.contains(D::DELIMITER) {
                return Err(ConversionError::render(
                    C::NAME,
                    format!("list element '{raw}' cannot be delimited"),
                ));
            }
            parts.push(raw);
        }

        let joined = parts.join(D::DELIMITER);
        let rendered = if D::WRAPPED && !parts.is_empty() {
            format!("{d}{joined}{d}", d = D::DELIMITER)
        } else {
            joined
        };

        // Delimiter fragments at element edges can form a new delimiter.
        let segments: Vec<&str> = rendered
            .split(D::DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
            .collect();
        if segments != parts {
            return Err(ConversionError::render(
                C::NAME,
                format!("list elements are ambiguous when joined as '{rendered}'"),
            ));
        }
        Ok(rendered)
    }
}
