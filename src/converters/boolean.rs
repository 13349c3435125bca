use super::{ConversionError, Converter};

/// Converts Ontraport flag fields.
///
/// Flags are rendered as `"1"` and `"0"`. Parsing also accepts `true` and
/// `false` in any case, since some endpoints echo JSON booleans.
///
/// # Example
///
/// ```rust
/// use ontraport_api::converters::{BoolConverter, Converter};
///
/// assert!(BoolConverter::parse("TRUE").unwrap());
/// assert_eq!(BoolConverter::render(&false).unwrap(), "0");
/// ```
#[derive(Debug)]
pub struct BoolConverter;

impl Converter for BoolConverter {
    type Value = bool;
    const NAME: &'static str = "bool";

    fn parse(raw: &str) -> Result<bool, ConversionError> {
        match raw.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            s if s.eq_ignore_ascii_case("true") => Ok(true),
            s if s.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(ConversionError::parse(
                raw,
                Self::NAME,
                "expected 1, 0, true or false",
            )),
        }
    }

    fn render(value: &bool) -> Result<String, ConversionError> {
        Ok(if *value { "1" } else { "0" }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_parses_numeric_and_word_forms() {
        assert!(BoolConverter::parse("1").unwrap());
        assert!(!BoolConverter::parse("0").unwrap());
        assert!(BoolConverter::parse("true").unwrap());
        assert!(!BoolConverter::parse("False").unwrap());
    }

    #[test]
    fn test_bool_rejects_other_values() {
        assert!(BoolConverter::parse("2").is_err());
        assert!(BoolConverter::parse("yes").is_err());
    }

    #[test]
    fn test_bool_round_trip() {
        for value in [true, false] {
            let raw = BoolConverter::render(&value).unwrap();
            assert_eq!(BoolConverter::parse(&raw).unwrap(), value);
        }
    }
}
