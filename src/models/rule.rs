//! Rule resource.

use crate::api::{DeletableResource, OntraportResource, WritableResource};
use crate::converters::{BoolConverter, DateTimeConverter, IntConverter, StringConverter};

crate::api_object! {
    /// An automation rule: events that trigger actions when conditions hold.
    ///
    /// Events, conditions and actions are opaque rule-language strings
    /// such as `Contact_added_to_tag(1)`.
    pub struct ApiRule {
        /// The rule's identifier.
        id: IntConverter => "id",
        /// The sequence the rule belongs to, if any.
        drip_id: IntConverter => "drip_id",
        /// Trigger events, separated by `;`.
        events: StringConverter => "events",
        /// Conditions checked before actions run, separated by `;`.
        conditions: StringConverter => "conditions",
        /// Actions performed, separated by `;`.
        actions: StringConverter => "actions",
        /// The rule's name.
        name: StringConverter => "name",
        /// Whether the rule is paused.
        pause: BoolConverter => "pause",
        /// When the rule last fired.
        last_action: DateTimeConverter => "last_action",
        /// The object type the rule applies to.
        object_type_id: IntConverter => "object_type_id",
        /// When the rule was created.
        date: DateTimeConverter => "date",
        /// When the rule was last modified.
        dlm: DateTimeConverter => "dlm",
    }
}

impl OntraportResource for ApiRule {
    const SINGULAR: &'static str = "Rule";
    const PLURAL: &'static str = "Rules";
}

impl DeletableResource for ApiRule {}

impl WritableResource for ApiRule {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiPropertyBase, ApiRecord};
    use serde_json::json;

    fn sample_rule() -> ApiRule {
        serde_json::from_value(json!({
            "id": "1",
            "drip_id": null,
            "events": "Contact_added_to_tag(1)",
            "conditions": "",
            "actions": "Add_contact_to_sequence(2)",
            "name": "Tagged contacts",
            "pause": "0",
            "last_action": "0",
            "object_type_id": "0",
            "date": "1546300800",
            "dlm": "1546387200"
        }))
        .unwrap()
    }

    #[test]
    fn test_rule_reads_typed_values() {
        let rule = sample_rule();

        assert_eq!(rule.id().value().unwrap(), 1);
        assert_eq!(rule.name().value().unwrap(), "Tagged contacts");
        assert!(!rule.pause().value().unwrap());
        assert!(rule.object_type_id().has_value());
        assert_eq!(rule.drip_id().value_opt().unwrap(), None);
        assert!(!rule.conditions().has_value());
        assert_eq!(rule.dlm().value().unwrap().timestamp(), 1_546_387_200);
    }

    #[test]
    fn test_rule_declares_every_wire_key() {
        let rule = sample_rule();

        assert!(rule.missing_keys().is_empty());
        assert!(rule.unmapped_keys().is_empty());
    }

    #[test]
    fn test_rule_write_through_accessor() {
        let mut rule = ApiRule::new();
        rule.pause_mut().set_value(true).unwrap();
        rule.name_mut().set_value("Paused".to_string()).unwrap();

        assert_eq!(rule.data().get("pause"), Some("1"));
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({"pause": "1", "name": "Paused"})
        );
    }
}
