//! Convention checks for the shipped record types.
//!
//! Records are compared against representative payloads so that drift
//! between declared fields and what the service sends shows up as a
//! failing test rather than a silently unreadable key.

use ontraport_api::api::OntraportResource;
use ontraport_api::models::{
    ApiContact, ApiFieldMetadata, ApiPropertyBase, ApiRecord, ApiRule, BulkMailStatus,
};
use serde_json::json;

// ============================================================================
// Rule
// ============================================================================

fn rule_payload() -> serde_json::Value {
    json!({
        "id": "3",
        "drip_id": "0",
        "events": "Contact_added_to_tag(1)",
        "conditions": "field_is(f1500,x)",
        "actions": "Add_contact_to_sequence(2)",
        "name": "Welcome",
        "pause": "1",
        "last_action": "0",
        "object_type_id": "0",
        "date": "1546300800",
        "dlm": "1546387200"
    })
}

#[test]
fn test_rule_declares_every_sent_field() {
    let rule: ApiRule = serde_json::from_value(rule_payload()).unwrap();

    assert!(rule.missing_keys().is_empty());
    assert!(rule.unmapped_keys().is_empty());
    assert_eq!(ApiRule::FIELD_KEYS.len(), 11);
}

#[test]
fn test_rule_field_consts_match_accessor_keys() {
    let rule: ApiRule = serde_json::from_value(rule_payload()).unwrap();

    assert_eq!(ApiRule::NAME.key(), "name");
    assert_eq!(ApiRule::PAUSE.key(), rule.pause().key());
    assert!(ApiRule::PAUSE.bind(rule.data()).value().unwrap());
}

#[test]
fn test_rule_endpoints() {
    assert_eq!(ApiRule::SINGULAR, "Rule");
    assert_eq!(ApiRule::PLURAL, "Rules");
}

#[test]
fn test_rule_reports_unknown_keys() {
    let mut payload = rule_payload();
    payload["new_column"] = json!("x");
    payload["f1234"] = json!("custom");
    let rule: ApiRule = serde_json::from_value(payload).unwrap();

    assert_eq!(rule.unmapped_keys(), vec!["new_column"]);
}

// ============================================================================
// Contact
// ============================================================================

#[test]
fn test_contact_reports_missing_fields() {
    let contact: ApiContact = serde_json::from_value(json!({
        "id": "10",
        "firstname": "Jane",
        "email": "jane@example.com"
    }))
    .unwrap();

    let missing = contact.missing_keys();
    assert_eq!(missing.len(), ApiContact::FIELD_KEYS.len() - 3);
    assert!(missing.contains(&"contact_cat"));
    assert!(!missing.contains(&"firstname"));
}

#[test]
fn test_contact_reads_typed_values() {
    let contact: ApiContact = serde_json::from_value(json!({
        "id": "10",
        "bulk_mail": "1",
        "contact_cat": "*/*4*/*9*/*",
        "spent": "19.99",
        "f1501": "custom"
    }))
    .unwrap();

    assert_eq!(contact.id().value().unwrap(), 10);
    assert_eq!(contact.bulk_mail().value().unwrap(), BulkMailStatus::SingleOptIn);
    assert_eq!(contact.tags().value().unwrap(), vec![4, 9]);
    assert!((contact.spent().value().unwrap() - 19.99).abs() < f64::EPSILON);
    assert!(contact.unmapped_keys().is_empty());
}

// ============================================================================
// Field metadata
// ============================================================================

#[test]
fn test_field_metadata_uses_type_key() {
    let field: ApiFieldMetadata = serde_json::from_value(json!({
        "alias": "First Name",
        "type": "text",
        "required": "0",
        "unique": "0",
        "editable": "1",
        "deletable": "0"
    }))
    .unwrap();

    assert!(field.missing_keys().is_empty());
    assert_eq!(field.field_type().value().unwrap(), "text");
    assert!(field.editable().value().unwrap());
    assert_eq!(field.display_name("firstname"), "First Name");
}
