//! The untyped data bag behind every Ontraport record.
//!
//! An [`ApiObject`] maps field keys to raw wire values exactly as the
//! remote service sent them. It has no knowledge of field types; typed
//! access goes through the accessors in [`property`](super::property).

use std::collections::hash_map;
use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw field values of one remote record, keyed by field name.
///
/// Values are stored in their raw string form. A key may also be present
/// with a `null` value, which is distinct from the key being absent.
///
/// # Deserialization
///
/// Any JSON object is accepted. Strings are kept verbatim, numbers and
/// booleans are stored as their JSON text, `null` stays `null`, and nested
/// arrays or objects are stored as compact JSON text.
///
/// # Example
///
/// ```rust
/// use ontraport_api::ApiObject;
///
/// let mut data: ApiObject = serde_json::from_str(r#"{"id": 5, "name": "Welcome", "drip_id": null}"#).unwrap();
///
/// assert_eq!(data.get("id"), Some("5"));
/// assert!(data.contains_key("drip_id"));
/// assert_eq!(data.get("drip_id"), None);
///
/// data.set("name", "Welcome back");
/// assert_eq!(data.get("name"), Some("Welcome back"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiObject {
    data: HashMap<String, Option<String>>,
}

impl ApiObject {
    /// Creates an empty data bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under `key`.
    ///
    /// Returns `None` both when the key is absent and when it holds `null`;
    /// use [`contains_key`](Self::contains_key) to tell the two apart.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Option::as_deref)
    }

    /// Returns `true` if `key` is present, even with a `null` value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Inserts or overwrites the raw value under `key`.
    pub fn set(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        self.data.insert(key.into(), Some(raw.into()));
    }

    /// Stores `null` under `key`, keeping the key present.
    pub fn set_null(&mut self, key: impl Into<String>) {
        self.data.insert(key.into(), None);
    }

    /// Removes `key`, returning its raw value if one was stored.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.data.remove(key).flatten()
    }

    /// Returns an iterator over the keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Returns an iterator over `(key, raw value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the bag holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copies every entry of `other` into this bag, overwriting existing keys.
    pub fn merge(&mut self, other: Self) {
        self.data.extend(other.data);
    }

    fn raw_from_json(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ApiObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            data: map
                .into_iter()
                .map(|(key, value)| (key, Self::raw_from_json(value)))
                .collect(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ApiObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(key, raw)| (key.into(), Some(raw.into())))
                .collect(),
        }
    }
}

/// Iterator over the entries of an [`ApiObject`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, Option<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, raw)| (key.as_str(), raw.as_deref()))
    }
}

impl<'a> IntoIterator for &'a ApiObject {
    type Item = (&'a str, Option<&'a str>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A typed record backed by one [`ApiObject`].
///
/// Implemented by the [`api_object!`](crate::api_object) macro, which also
/// fills [`FIELD_KEYS`](Self::FIELD_KEYS) with every declared field key.
pub trait ApiRecord: Sized {
    /// Keys of every field declared on the record.
    const FIELD_KEYS: &'static [&'static str];

    /// Wraps an existing data bag.
    fn from_data(data: ApiObject) -> Self;

    /// Returns the underlying data bag.
    fn data(&self) -> &ApiObject;

    /// Returns the underlying data bag mutably.
    fn data_mut(&mut self) -> &mut ApiObject;

    /// Unwraps the record into its data bag.
    fn into_data(self) -> ApiObject;

    /// Declared field keys that the data bag does not contain.
    ///
    /// A non-empty result on a freshly fetched record means the remote
    /// schema no longer sends a field this record declares.
    #[must_use]
    fn missing_keys(&self) -> Vec<&'static str> {
        Self::FIELD_KEYS
            .iter()
            .copied()
            .filter(|key| !self.data().contains_key(key))
            .collect()
    }

    /// Keys in the data bag that no declared field covers.
    ///
    /// Account-specific custom fields (`f` followed by four digits) are
    /// ignored. Results are sorted.
    #[must_use]
    fn unmapped_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .data()
            .keys()
            .filter(|key| {
                !is_custom_field_key(key) && !Self::FIELD_KEYS.iter().any(|field| field == key)
            })
            .collect();
        keys.sort_unstable();
        keys
    }
}

/// Returns `true` for account-specific custom field keys such as `f1234`.
#[must_use]
pub fn is_custom_field_key(key: &str) -> bool {
    key.len() == 5
        && key.starts_with('f')
        && key[1..].bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_returns_none_for_missing_key() {
        let data = ApiObject::new();
        assert_eq!(data.get("missing"), None);
        assert!(!data.contains_key("missing"));
    }

    #[test]
    fn test_set_inserts_and_overwrites() {
        let mut data = ApiObject::new();
        data.set("name", "first");
        data.set("name", "second");
        assert_eq!(data.get("name"), Some("second"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_null_value_keeps_key_present() {
        let mut data = ApiObject::new();
        data.set_null("drip_id");
        assert!(data.contains_key("drip_id"));
        assert_eq!(data.get("drip_id"), None);
    }

    #[test]
    fn test_remove_drops_key() {
        let mut data: ApiObject = [("id", "1")].into_iter().collect();
        assert_eq!(data.remove("id"), Some("1".to_string()));
        assert!(data.is_empty());
    }

    #[test]
    fn test_deserialize_stores_raw_forms() {
        let data: ApiObject = serde_json::from_value(json!({
            "text": "hello",
            "number": 42,
            "decimal": 1.5,
            "flag": true,
            "nothing": null,
            "list": [1, 2],
            "nested": {"a": "b"}
        }))
        .unwrap();

        assert_eq!(data.get("text"), Some("hello"));
        assert_eq!(data.get("number"), Some("42"));
        assert_eq!(data.get("decimal"), Some("1.5"));
        assert_eq!(data.get("flag"), Some("true"));
        assert!(data.contains_key("nothing"));
        assert_eq!(data.get("nothing"), None);
        assert_eq!(data.get("list"), Some("[1,2]"));
        assert_eq!(data.get("nested"), Some(r#"{"a":"b"}"#));
    }

    #[test]
    fn test_serialize_writes_strings_and_nulls() {
        let mut data = ApiObject::new();
        data.set("id", "7");
        data.set_null("drip_id");

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({"id": "7", "drip_id": null}));
    }

    #[test]
    fn test_merge_overwrites_existing_keys() {
        let mut data: ApiObject = [("id", "1"), ("name", "old")].into_iter().collect();
        let update: ApiObject = [("name", "new"), ("dlm", "1700000000")].into_iter().collect();

        data.merge(update);

        assert_eq!(data.get("id"), Some("1"));
        assert_eq!(data.get("name"), Some("new"));
        assert_eq!(data.get("dlm"), Some("1700000000"));
    }

    #[test]
    fn test_iter_visits_every_entry() {
        let mut data: ApiObject = [("a", "1")].into_iter().collect();
        data.set_null("b");

        let mut entries: Vec<_> = data.iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![("a", Some("1")), ("b", None)]);
    }

    #[test]
    fn test_custom_field_key_detection() {
        assert!(is_custom_field_key("f1234"));
        assert!(!is_custom_field_key("f123"));
        assert!(!is_custom_field_key("f12345"));
        assert!(!is_custom_field_key("firstname"));
        assert!(!is_custom_field_key("g1234"));
    }
}
