//! Typed accessors over a single data bag key.
//!
//! An accessor is a view bound to one `(ApiObject, key)` pair. It converts
//! the raw stored string to a typed value on read and renders a typed value
//! back to its raw string on write, delegating both directions to a
//! [`Converter`].
//!
//! - [`ApiProperty`] borrows the bag shared and only reads.
//! - [`ApiPropertyMut`] borrows the bag exclusively and can also write.
//! - [`Field`] is a `const` key descriptor that binds either view.
//!
//! Any number of read views may coexist over the same bag. A write view
//! holds the only borrow for as long as it lives, so two accessors can
//! never observe a half-written bag.
//!
//! # Presence
//!
//! [`has_key`](ApiPropertyBase::has_key) reports whether the key exists at
//! all. [`has_value`](ApiPropertyBase::has_value) additionally requires a
//! non-empty raw string. Presence is about the raw text, not the typed
//! value: a raw `"0"` has a value even though it converts to zero.
//!
//! # Example
//!
//! ```rust
//! use ontraport_api::models::{ApiObject, ApiProperty, ApiPropertyBase, ApiPropertyMut};
//! use ontraport_api::converters::IntConverter;
//!
//! let mut data = ApiObject::new();
//!
//! let mut count = ApiPropertyMut::<IntConverter>::new(&mut data, "count");
//! assert!(!count.has_key());
//! assert_eq!(count.value().unwrap(), 0);
//!
//! count.set_value(0).unwrap();
//! assert!(count.has_value());
//! assert_eq!(count.raw_value(), "0");
//!
//! let count = ApiProperty::<IntConverter>::new(&data, "count");
//! assert_eq!(count.value().unwrap(), 0);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::converters::{ConversionError, Converter};
use crate::models::ApiObject;

/// Read operations shared by every accessor kind.
///
/// Implementors only supply the bound key and bag; the queries and the
/// typed read are provided.
pub trait ApiPropertyBase {
    /// The converter used for this field.
    type Converter: Converter;

    /// The key this accessor is bound to.
    fn key(&self) -> &str;

    /// The data bag this accessor reads from.
    fn data(&self) -> &ApiObject;

    /// Returns `true` if the key exists in the bag, whatever its value.
    fn has_key(&self) -> bool {
        self.data().contains_key(self.key())
    }

    /// Returns `true` if the key exists and its raw value is non-empty.
    fn has_value(&self) -> bool {
        self.data()
            .get(self.key())
            .is_some_and(|raw| !raw.is_empty())
    }

    /// Returns the raw string under the key, or `""` when absent or null.
    fn raw_value(&self) -> &str {
        self.data().get(self.key()).unwrap_or_default()
    }

    /// Returns the typed value.
    ///
    /// Fields without a value (absent, null or empty) read as the value
    /// type's default.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Parse`] if the raw value is malformed.
    fn value(&self) -> Result<<Self::Converter as Converter>::Value, ConversionError> {
        Ok(self.value_opt()?.unwrap_or_default())
    }

    /// Returns the typed value, or `None` if the field holds no value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Parse`] if the raw value is malformed.
    fn value_opt(&self) -> Result<Option<<Self::Converter as Converter>::Value>, ConversionError> {
        if !self.has_value() {
            return Ok(None);
        }
        <Self::Converter as Converter>::parse(self.raw_value()).map(Some)
    }
}

/// A read-only typed view over one key of a shared [`ApiObject`].
pub struct ApiProperty<'a, C> {
    data: &'a ApiObject,
    key: &'a str,
    converter: PhantomData<fn() -> C>,
}

impl<'a, C: Converter> ApiProperty<'a, C> {
    /// Binds an accessor to `key` in `data`.
    ///
    /// The key does not need to exist yet; absence is a normal state.
    #[must_use]
    pub const fn new(data: &'a ApiObject, key: &'a str) -> Self {
        Self {
            data,
            key,
            converter: PhantomData,
        }
    }
}

impl<C: Converter> ApiPropertyBase for ApiProperty<'_, C> {
    type Converter = C;

    fn key(&self) -> &str {
        self.key
    }

    fn data(&self) -> &ApiObject {
        self.data
    }
}

impl<C> Clone for ApiProperty<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ApiProperty<'_, C> {}

impl<C> fmt::Debug for ApiProperty<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiProperty")
            .field("key", &self.key)
            .field("raw_value", &self.data.get(self.key))
            .finish()
    }
}

/// A read-write typed view over one key of an exclusively borrowed [`ApiObject`].
///
/// [`set_value`](Self::set_value) is the only way this accessor mutates
/// the bag. It renders before storing, so a failed conversion leaves the
/// previous raw value in place.
pub struct ApiPropertyMut<'a, C> {
    data: &'a mut ApiObject,
    key: &'a str,
    converter: PhantomData<fn() -> C>,
}

impl<'a, C: Converter> ApiPropertyMut<'a, C> {
    /// Binds a writable accessor to `key` in `data`.
    #[must_use]
    pub fn new(data: &'a mut ApiObject, key: &'a str) -> Self {
        Self {
            data,
            key,
            converter: PhantomData,
        }
    }

    /// Renders `value` and stores it under the key, creating the key if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if the value has no raw form.
    /// The bag is unchanged in that case.
    pub fn set_value(&mut self, value: C::Value) -> Result<(), ConversionError> {
        let raw = C::render(&value)?;
        self.data.set(self.key, raw);
        Ok(())
    }

    /// Stores `value`, or an empty raw string for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Render`] if the value has no raw form.
    pub fn set_value_opt(&mut self, value: Option<C::Value>) -> Result<(), ConversionError> {
        match value {
            Some(value) => self.set_value(value),
            None => {
                self.data.set(self.key, String::new());
                Ok(())
            }
        }
    }

    /// Reborrows this accessor as a read-only view.
    #[must_use]
    pub fn as_property(&self) -> ApiProperty<'_, C> {
        ApiProperty::new(&*self.data, self.key)
    }
}

impl<C: Converter> ApiPropertyBase for ApiPropertyMut<'_, C> {
    type Converter = C;

    fn key(&self) -> &str {
        self.key
    }

    fn data(&self) -> &ApiObject {
        &*self.data
    }
}

impl<C> fmt::Debug for ApiPropertyMut<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiPropertyMut")
            .field("key", &self.key)
            .field("raw_value", &self.data.get(self.key))
            .finish()
    }
}

/// A field key paired with its converter, declared once per record field.
///
/// # Example
///
/// ```rust
/// use ontraport_api::models::{ApiObject, ApiPropertyBase, Field};
/// use ontraport_api::converters::BoolConverter;
///
/// const PAUSE: Field<BoolConverter> = Field::new("pause");
///
/// let mut data = ApiObject::new();
/// PAUSE.bind_mut(&mut data).set_value(true).unwrap();
/// assert_eq!(data.get("pause"), Some("1"));
/// assert!(PAUSE.bind(&data).value().unwrap());
/// ```
pub struct Field<C> {
    key: &'static str,
    converter: PhantomData<fn() -> C>,
}

impl<C: Converter> Field<C> {
    /// Declares a field stored under `key`.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            converter: PhantomData,
        }
    }

    /// Returns the field's key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Binds a read-only accessor over `data`.
    #[must_use]
    pub const fn bind<'a>(&self, data: &'a ApiObject) -> ApiProperty<'a, C> {
        ApiProperty::new(data, self.key)
    }

    /// Binds a writable accessor over `data`.
    #[must_use]
    pub fn bind_mut<'a>(&self, data: &'a mut ApiObject) -> ApiPropertyMut<'a, C> {
        ApiPropertyMut::new(data, self.key)
    }
}

impl<C> Clone for Field<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Field<C> {}

impl<C> fmt::Debug for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::{BoolConverter, DecimalConverter, IntConverter, StringConverter};

    #[test]
    fn test_absent_key_reads_as_default() {
        let data = ApiObject::new();
        let prop = ApiProperty::<IntConverter>::new(&data, "key1");

        assert!(!prop.has_key());
        assert!(!prop.has_value());
        assert_eq!(prop.raw_value(), "");
        assert_eq!(prop.value().unwrap(), 0);
        assert_eq!(prop.value_opt().unwrap(), None);
    }

    #[test]
    fn test_empty_raw_value_has_key_but_no_value() {
        let data: ApiObject = [("key1", "")].into_iter().collect();
        let prop = ApiProperty::<IntConverter>::new(&data, "key1");

        assert!(prop.has_key());
        assert!(!prop.has_value());
        assert_eq!(prop.value().unwrap(), 0);
    }

    #[test]
    fn test_null_raw_value_has_key_but_no_value() {
        let mut data = ApiObject::new();
        data.set_null("key1");
        let prop = ApiProperty::<StringConverter>::new(&data, "key1");

        assert!(prop.has_key());
        assert!(!prop.has_value());
        assert_eq!(prop.raw_value(), "");
    }

    #[test]
    fn test_zero_raw_value_has_value() {
        let data: ApiObject = [("key1", "0")].into_iter().collect();
        let prop = ApiProperty::<IntConverter>::new(&data, "key1");

        assert!(prop.has_value());
        assert_eq!(prop.value().unwrap(), 0);
        assert_eq!(prop.value_opt().unwrap(), Some(0));
    }

    #[test]
    fn test_malformed_raw_value_propagates_error() {
        let data: ApiObject = [("key1", "five")].into_iter().collect();
        let prop = ApiProperty::<IntConverter>::new(&data, "key1");

        assert!(matches!(prop.value(), Err(ConversionError::Parse { .. })));
        assert!(prop.value_opt().is_err());
    }

    #[test]
    fn test_set_value_writes_rendered_raw() {
        let mut data = ApiObject::new();
        let mut prop = ApiPropertyMut::<BoolConverter>::new(&mut data, "pause");

        prop.set_value(true).unwrap();

        assert_eq!(prop.raw_value(), "1");
        assert!(prop.value().unwrap());
        assert_eq!(data.get("pause"), Some("1"));
    }

    #[test]
    fn test_failed_render_leaves_bag_unchanged() {
        let mut data: ApiObject = [("spent", "12.5")].into_iter().collect();
        let mut prop = ApiPropertyMut::<DecimalConverter>::new(&mut data, "spent");

        assert!(prop.set_value(f64::NAN).is_err());
        assert_eq!(prop.raw_value(), "12.5");
    }

    #[test]
    fn test_set_value_opt_none_clears_value() {
        let mut data: ApiObject = [("owner", "3")].into_iter().collect();
        let mut prop = ApiPropertyMut::<IntConverter>::new(&mut data, "owner");

        prop.set_value_opt(None).unwrap();

        assert!(prop.has_key());
        assert!(!prop.has_value());
    }

    #[test]
    fn test_as_property_reads_through_same_bag() {
        let mut data = ApiObject::new();
        let mut prop = ApiPropertyMut::<IntConverter>::new(&mut data, "count");
        prop.set_value(-5).unwrap();

        assert_eq!(prop.as_property().value().unwrap(), -5);
    }

    #[test]
    fn test_field_binds_both_views() {
        const COUNT: Field<IntConverter> = Field::new("count");
        let mut data = ApiObject::new();

        COUNT.bind_mut(&mut data).set_value(9).unwrap();

        assert_eq!(COUNT.key(), "count");
        assert_eq!(COUNT.bind(&data).value().unwrap(), 9);
    }

    #[test]
    fn test_debug_shows_key_and_raw_value() {
        let data: ApiObject = [("name", "Welcome")].into_iter().collect();
        let prop = ApiProperty::<StringConverter>::new(&data, "name");

        let debug = format!("{prop:?}");
        assert!(debug.contains("name"));
        assert!(debug.contains("Welcome"));
    }
}
