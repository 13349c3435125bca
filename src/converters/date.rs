use chrono::{DateTime, Utc};

use super::{ConversionError, Converter};

/// Converts Unix timestamps (whole seconds) to UTC date-times.
///
/// Instants with a sub-second component have no wire form; rendering
/// them fails rather than truncating, so a stored raw value always reads
/// back as the same instant.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use ontraport_api::converters::{Converter, DateTimeConverter};
///
/// let date = DateTimeConverter::parse("1546300800").unwrap();
/// assert_eq!(date, Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(DateTimeConverter::render(&date).unwrap(), "1546300800");
/// ```
#[derive(Debug)]
pub struct DateTimeConverter;

impl Converter for DateTimeConverter {
    type Value = DateTime<Utc>;
    const NAME: &'static str = "DateTime<Utc>";

    fn parse(raw: &str) -> Result<DateTime<Utc>, ConversionError> {
        let seconds: i64 = raw
            .trim()
            .parse()
            .map_err(|e| ConversionError::parse(raw, Self::NAME, e))?;
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            ConversionError::parse(raw, Self::NAME, "timestamp is out of range")
        })
    }

    fn render(value: &DateTime<Utc>) -> Result<String, ConversionError> {
        if value.timestamp_subsec_nanos() != 0 {
            return Err(ConversionError::render(
                Self::NAME,
                format!("{value} has a sub-second component"),
            ));
        }
        Ok(value.timestamp().to_string())
    }
}
