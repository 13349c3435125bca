//! Schema and collection descriptions returned by the `meta` and `getInfo`
//! endpoints.

use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::converters::{BoolConverter, Converter, LongConverter, StringConverter};
use crate::models::ApiPropertyBase;

crate::api_object! {
    /// Description of one field in an object's schema.
    pub struct ApiFieldMetadata {
        /// Display name of the field.
        alias: StringConverter => "alias",
        /// Field type, such as `text`, `email` or `timestamp`.
        field_type: StringConverter => "type",
        /// Whether the field must be set.
        required: BoolConverter => "required",
        /// Whether values must be unique across records.
        unique: BoolConverter => "unique",
        /// Whether the field can be edited.
        editable: BoolConverter => "editable",
        /// Whether the field can be deleted.
        deletable: BoolConverter => "deletable",
    }
}

/// Schema of an object type.
///
/// The `meta` endpoint keys its payload by object type ID. Only the first
/// entry is kept since each resource requests its own type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Object type ID the schema describes.
    pub object_type_id: String,
    /// Name of the object type.
    pub name: String,
    /// Field descriptions keyed by field key.
    pub fields: HashMap<String, ApiFieldMetadata>,
}

#[derive(Deserialize)]
struct RawMetadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: HashMap<String, ApiFieldMetadata>,
}

impl<'de> Deserialize<'de> for ResponseMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = HashMap::<String, RawMetadata>::deserialize(deserializer)?;
        let (object_type_id, raw) = entries
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::custom("metadata response contains no object type"))?;

        Ok(Self {
            object_type_id,
            name: raw.name,
            fields: raw.fields,
        })
    }
}

/// Summary of a collection returned by the `getInfo` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResponseCollectionInfo {
    /// Fields shown in list views.
    #[serde(rename = "listFields", default)]
    pub list_fields: Vec<String>,
    /// Display settings for the list fields.
    #[serde(rename = "listFieldSettings", default)]
    pub list_field_settings: Value,
    /// Number of records matching the request.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: i64,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::String(raw) => LongConverter::parse(&raw).map_err(de::Error::custom),
        other => LongConverter::parse(&other.to_string()).map_err(de::Error::custom),
    }
}

impl ApiFieldMetadata {
    /// Returns the display name, falling back to `key` when none is set.
    #[must_use]
    pub fn display_name(&self, key: &str) -> String {
        self.alias()
            .value_opt()
            .ok()
            .flatten()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_takes_first_object_entry() {
        let metadata: ResponseMetadata = serde_json::from_value(json!({
            "6": {
                "name": "Rule",
                "fields": {
                    "name": {
                        "alias": "Name",
                        "type": "text",
                        "required": "1",
                        "unique": "0",
                        "editable": "1",
                        "deletable": "0"
                    },
                    "events": {"alias": "Events", "type": "longtext"}
                }
            }
        }))
        .unwrap();

        assert_eq!(metadata.object_type_id, "6");
        assert_eq!(metadata.name, "Rule");
        assert_eq!(metadata.fields.len(), 2);

        let name = &metadata.fields["name"];
        assert_eq!(name.field_type().value().unwrap(), "text");
        assert!(name.required().value().unwrap());
        assert!(!name.deletable().value().unwrap());
        assert!(!metadata.fields["events"].required().has_key());
    }

    #[test]
    fn test_metadata_without_entries_is_an_error() {
        let result: Result<ResponseMetadata, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_field_display_name_falls_back_to_key() {
        let field: ApiFieldMetadata = serde_json::from_value(json!({"alias": ""})).unwrap();
        assert_eq!(field.display_name("f1234"), "f1234");

        let field: ApiFieldMetadata = serde_json::from_value(json!({"alias": "Score"})).unwrap();
        assert_eq!(field.display_name("f1234"), "Score");
    }

    #[test]
    fn test_collection_info_accepts_string_and_number_counts() {
        let info: ResponseCollectionInfo = serde_json::from_value(json!({
            "listFields": ["name", "events"],
            "listFieldSettings": [],
            "count": "2"
        }))
        .unwrap();
        assert_eq!(info.list_fields, vec!["name", "events"]);
        assert_eq!(info.count, 2);

        let info: ResponseCollectionInfo =
            serde_json::from_value(json!({"listFields": [], "count": 17})).unwrap();
        assert_eq!(info.count, 17);
    }

    #[test]
    fn test_collection_info_rejects_malformed_count() {
        let result: Result<ResponseCollectionInfo, _> =
            serde_json::from_value(json!({"count": "many"}));
        assert!(result.is_err());
    }
}
