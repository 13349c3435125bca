use super::{ConversionError, Converter};

/// Identity converter for free-text fields.
#[derive(Debug)]
pub struct StringConverter;

impl Converter for StringConverter {
    type Value = String;
    const NAME: &'static str = "String";

    fn parse(raw: &str) -> Result<String, ConversionError> {
        Ok(raw.to_string())
    }

    fn render(value: &String) -> Result<String, ConversionError> {
        Ok(value.clone())
    }
}
