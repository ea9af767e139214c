//! Configuration category snapshots.
//!
//! A category is a named map of configuration items as the platform's
//! configuration store serves them: each item is an object carrying at
//! least a `type`, a `default`, and usually a `value`. This type is used
//! both for the delivery's own configuration blob and for the category
//! snapshots fetched from the store when mutating an item.

use serde_json::{Map, Value};

/// An immutable snapshot of one configuration category.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigCategory {
    name: String,
    items: Map<String, Value>,
}

impl ConfigCategory {
    /// Parse a category from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError`] when the text is not valid JSON or the
    /// top level is not an object.
    pub fn parse(name: &str, json: &str) -> Result<Self, CategoryError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(name, value)
    }

    /// Build a category from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryError::NotAnObject`] when `value` is not an object.
    pub fn from_value(name: &str, value: Value) -> Result<Self, CategoryError> {
        match value {
            Value::Object(items) => Ok(Self {
                name: name.to_string(),
                items,
            }),
            _ => Err(CategoryError::NotAnObject {
                name: name.to_string(),
            }),
        }
    }

    /// The category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an item with the given name exists.
    #[must_use]
    pub fn item_exists(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// The item's current value as text.
    ///
    /// Prefers the `value` member and falls back to `default`. String
    /// values are returned as-is; JSON-typed values are re-serialized
    /// compactly. Returns `None` when the item is absent or carries
    /// neither member.
    #[must_use]
    pub fn value(&self, item: &str) -> Option<String> {
        let entry = self.items.get(item)?;
        let value = entry.get("value").or_else(|| entry.get("default"))?;
        Some(match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }

    /// Whether the item's declared type is `JSON`.
    #[must_use]
    pub fn is_json(&self, item: &str) -> bool {
        self.items
            .get(item)
            .and_then(|entry| entry.get("type"))
            .and_then(Value::as_str)
            == Some("JSON")
    }

    /// The item's value interpreted as a boolean flag.
    ///
    /// Exactly `"true"` and `"True"` count as true, matching the switch
    /// semantics of the delivery configuration; everything else, including
    /// a missing item, is false.
    #[must_use]
    pub fn bool_value(&self, item: &str) -> bool {
        matches!(self.value(item).as_deref(), Some("true" | "True"))
    }
}

/// Errors raised while building a category snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// The category text is not valid JSON.
    #[error("category is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// The category top level is not a JSON object.
    #[error("category '{name}' is not a JSON object")]
    NotAnObject {
        /// The category name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigCategory {
        ConfigCategory::from_value(
            "delivery",
            json!({
                "service": {"type": "string", "default": "", "value": "pump-south"},
                "triggerValue": {"type": "JSON", "default": {"values": {"speed": 0}},
                                 "value": {"values": {"speed": 100}}},
                "enable": {"type": "boolean", "default": "false", "value": "true"},
                "empty": {"type": "string"}
            }),
        )
        .unwrap()
    }

    #[test]
    fn should_report_existing_items() {
        let category = sample();
        assert!(category.item_exists("service"));
        assert!(!category.item_exists("missing"));
    }

    #[test]
    fn should_return_string_value_as_is() {
        assert_eq!(sample().value("service").as_deref(), Some("pump-south"));
    }

    #[test]
    fn should_serialize_json_value_compactly() {
        let value = sample().value("triggerValue").unwrap();
        assert_eq!(value, r#"{"values":{"speed":100}}"#);
    }

    #[test]
    fn should_fall_back_to_default_when_value_is_absent() {
        let category = ConfigCategory::from_value(
            "delivery",
            json!({"item": {"type": "string", "default": "fallback"}}),
        )
        .unwrap();
        assert_eq!(category.value("item").as_deref(), Some("fallback"));
    }

    #[test]
    fn should_return_none_for_missing_item_or_value() {
        let category = sample();
        assert_eq!(category.value("missing"), None);
        assert_eq!(category.value("empty"), None);
    }

    #[test]
    fn should_detect_json_typed_items() {
        let category = sample();
        assert!(category.is_json("triggerValue"));
        assert!(!category.is_json("service"));
        assert!(!category.is_json("missing"));
    }

    #[test]
    fn should_parse_boolean_flags_strictly() {
        let raw = |value: &str| {
            ConfigCategory::from_value(
                "c",
                json!({"enable": {"type": "boolean", "value": value}}),
            )
            .unwrap()
        };
        assert!(raw("true").bool_value("enable"));
        assert!(raw("True").bool_value("enable"));
        assert!(!raw("TRUE").bool_value("enable"));
        assert!(!raw("false").bool_value("enable"));
        assert!(!sample().bool_value("missing"));
    }

    #[test]
    fn should_parse_category_from_text() {
        let category =
            ConfigCategory::parse("c", r#"{"item":{"type":"string","value":"x"}}"#).unwrap();
        assert_eq!(category.name(), "c");
        assert_eq!(category.value("item").as_deref(), Some("x"));
    }

    #[test]
    fn should_reject_invalid_json_text() {
        let err = ConfigCategory::parse("c", "{oops").unwrap_err();
        assert!(matches!(err, CategoryError::InvalidJson(_)));
    }

    #[test]
    fn should_reject_non_object_category() {
        let err = ConfigCategory::from_value("c", json!([1, 2])).unwrap_err();
        assert!(matches!(err, CategoryError::NotAnObject { .. }));
    }
}
