//! Tests for typed property accessors over a shared data bag.
//!
//! Covers the read and write laws every accessor kind must satisfy,
//! independent of the record type it is used with.

use ontraport_api::converters::{
    BoolConverter, DateTimeConverter, DecimalConverter, IntConverter, ListConverter,
    LongConverter, StringConverter,
};
use ontraport_api::models::{ApiObject, ApiProperty, ApiPropertyBase, ApiPropertyMut, Field};
use ontraport_api::ConversionError;

const KEY: &str = "key";

fn bag_with(raw: &str) -> ApiObject {
    let mut data = ApiObject::new();
    data.set(KEY, raw);
    data
}

// ============================================================================
// Integer reads and writes
// ============================================================================

#[test]
fn test_int_value_reads_zero() {
    let data = bag_with("0");
    let property = ApiProperty::<IntConverter>::new(&data, KEY);

    assert_eq!(property.value().unwrap(), 0);
    assert!(property.has_value());
}

#[test]
fn test_int_value_reads_positive() {
    let data = bag_with("5");
    assert_eq!(ApiProperty::<IntConverter>::new(&data, KEY).value().unwrap(), 5);
}

#[test]
fn test_int_value_reads_negative() {
    let data = bag_with("-5");
    assert_eq!(ApiProperty::<IntConverter>::new(&data, KEY).value().unwrap(), -5);
}

#[test]
fn test_int_value_writes_zero_positive_and_negative() {
    let mut data = ApiObject::new();

    for (value, raw) in [(0, "0"), (5, "5"), (-5, "-5")] {
        ApiPropertyMut::<IntConverter>::new(&mut data, KEY)
            .set_value(value)
            .unwrap();
        assert_eq!(data.get(KEY), Some(raw));
    }
}

#[test]
fn test_malformed_raw_value_is_parse_error() {
    let data = bag_with("five");
    let result = ApiProperty::<IntConverter>::new(&data, KEY).value();

    assert!(matches!(result, Err(ConversionError::Parse { .. })));
}

// ============================================================================
// Presence
// ============================================================================

#[test]
fn test_absent_key_has_no_key_and_reads_default() {
    let data = ApiObject::new();
    let property = ApiProperty::<LongConverter>::new(&data, KEY);

    assert!(!property.has_key());
    assert!(!property.has_value());
    assert_eq!(property.raw_value(), "");
    assert_eq!(property.value().unwrap(), 0);
    assert_eq!(property.value_opt().unwrap(), None);
}

#[test]
fn test_null_key_is_present_without_value() {
    let mut data = ApiObject::new();
    data.set_null(KEY);
    let property = ApiProperty::<StringConverter>::new(&data, KEY);

    assert!(property.has_key());
    assert!(!property.has_value());
    assert_eq!(property.value_opt().unwrap(), None);
}

#[test]
fn test_empty_raw_value_reads_as_no_value() {
    let data = bag_with("");
    let property = ApiProperty::<DateTimeConverter>::new(&data, KEY);

    assert!(property.has_key());
    assert!(!property.has_value());
    assert!(property.value_opt().unwrap().is_none());
}

#[test]
fn test_set_value_opt_none_clears_value_but_keeps_key() {
    let mut data = bag_with("12.5");
    let mut property = ApiPropertyMut::<DecimalConverter>::new(&mut data, KEY);

    property.set_value_opt(None).unwrap();

    assert!(property.has_key());
    assert!(!property.has_value());
    assert_eq!(property.raw_value(), "");
}

// ============================================================================
// Write failures
// ============================================================================

#[test]
fn test_failed_render_leaves_bag_unchanged() {
    let mut data = bag_with("1.5");

    let result = ApiPropertyMut::<DecimalConverter>::new(&mut data, KEY).set_value(f64::NAN);

    assert!(matches!(result, Err(ConversionError::Render { .. })));
    assert_eq!(data.get(KEY), Some("1.5"));
}

#[test]
fn test_failed_list_render_leaves_bag_unchanged() {
    let mut data = bag_with("a,b");

    let result = ApiPropertyMut::<ListConverter<StringConverter>>::new(&mut data, KEY)
        .set_value(vec!["c".to_string(), "d,e".to_string()]);

    assert!(result.is_err());
    assert_eq!(data.get(KEY), Some("a,b"));
}

// ============================================================================
// Independence
// ============================================================================

#[test]
fn test_accessors_on_different_keys_are_independent() {
    let mut data = ApiObject::new();
    ApiPropertyMut::<BoolConverter>::new(&mut data, "flag")
        .set_value(true)
        .unwrap();
    ApiPropertyMut::<IntConverter>::new(&mut data, "count")
        .set_value(3)
        .unwrap();

    assert!(ApiProperty::<BoolConverter>::new(&data, "flag").value().unwrap());
    assert_eq!(ApiProperty::<IntConverter>::new(&data, "count").value().unwrap(), 3);
    assert_eq!(data.len(), 2);
}

#[test]
fn test_accessors_on_same_key_observe_each_others_writes() {
    let mut data = ApiObject::new();

    ApiPropertyMut::<LongConverter>::new(&mut data, KEY)
        .set_value(42)
        .unwrap();
    let as_text = ApiProperty::<StringConverter>::new(&data, KEY);
    let as_number = ApiProperty::<LongConverter>::new(&data, KEY);

    assert_eq!(as_text.value().unwrap(), "42");
    assert_eq!(as_number.value().unwrap(), 42);
}

#[test]
fn test_write_view_reads_back_its_own_write() {
    let mut data = ApiObject::new();
    let mut property = ApiPropertyMut::<StringConverter>::new(&mut data, KEY);

    property.set_value("hello".to_string()).unwrap();

    assert_eq!(property.value().unwrap(), "hello");
    assert_eq!(property.as_property().raw_value(), "hello");
}

// ============================================================================
// Field descriptors
// ============================================================================

const COUNT: Field<IntConverter> = Field::new("count");

#[test]
fn test_field_binds_read_and_write_views() {
    let mut data = ApiObject::new();

    COUNT.bind_mut(&mut data).set_value(-7).unwrap();

    assert_eq!(COUNT.key(), "count");
    assert_eq!(COUNT.bind(&data).value().unwrap(), -7);
    assert_eq!(data.get("count"), Some("-7"));
}
