//! Type-preserving replacement of one property inside a JSON document.
//!
//! The replacement value always arrives as text; the existing property
//! decides how that text is interpreted. A string property takes the text
//! verbatim, numeric properties parse it, and every other type is left
//! untouched. The property's JSON type never changes as a result of a
//! mutation.

use serde_json::{Number, Value};

use super::path::JsonPath;

/// What a successful [`set_property`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The property held a string, integer or float and was replaced.
    Replaced,
    /// The property holds a type that is not subject to replacement
    /// (bool, null, array, object). The document is unchanged.
    LeftUnchanged,
}

/// Replace `property` on the object addressed by `path`, preserving the
/// property's original JSON type.
///
/// On any error the document is left unmodified.
///
/// # Errors
///
/// - [`MutateError::PathNotFound`] when the path resolves to no node
/// - [`MutateError::NotAnObject`] when the resolved node is not an object
/// - [`MutateError::PropertyNotFound`] when the object lacks `property`
/// - [`MutateError::InvalidReplacement`] when the property is numeric and
///   `new_value` does not parse as a number of that kind
pub fn set_property(
    document: &mut Value,
    path: &JsonPath,
    property: &str,
    new_value: &str,
) -> Result<MutationOutcome, MutateError> {
    let node = path
        .resolve_mut(document)
        .ok_or_else(|| MutateError::PathNotFound {
            path: path.to_string(),
        })?;
    let object = node.as_object_mut().ok_or_else(|| MutateError::NotAnObject {
        path: path.to_string(),
    })?;
    let current = object
        .get_mut(property)
        .ok_or_else(|| MutateError::PropertyNotFound {
            path: path.to_string(),
            property: property.to_string(),
        })?;

    let replacement = match current {
        Value::String(_) => Value::String(new_value.to_string()),
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            let parsed: i64 =
                new_value
                    .trim()
                    .parse()
                    .map_err(|_| MutateError::InvalidReplacement {
                        property: property.to_string(),
                        value: new_value.to_string(),
                        expected: "integer",
                    })?;
            Value::Number(Number::from(parsed))
        }
        Value::Number(_) => {
            let parsed: f64 =
                new_value
                    .trim()
                    .parse()
                    .map_err(|_| MutateError::InvalidReplacement {
                        property: property.to_string(),
                        value: new_value.to_string(),
                        expected: "float",
                    })?;
            let number = Number::from_f64(parsed).ok_or_else(|| MutateError::InvalidReplacement {
                property: property.to_string(),
                value: new_value.to_string(),
                expected: "float",
            })?;
            Value::Number(number)
        }
        _ => return Ok(MutationOutcome::LeftUnchanged),
    };

    *current = replacement;
    Ok(MutationOutcome::Replaced)
}

/// Parse a JSON document, apply [`set_property`], and re-serialize.
///
/// The call is atomic from the caller's perspective: either the returned
/// text carries the mutation, or an error is returned and nothing was
/// persisted.
///
/// # Errors
///
/// Returns [`MutateError::InvalidDocument`] when `json` does not parse, or
/// any [`set_property`] error.
pub fn mutate_document(
    json: &str,
    path: &JsonPath,
    property: &str,
    new_value: &str,
) -> Result<String, MutateError> {
    let mut document: Value = serde_json::from_str(json)?;
    set_property(&mut document, path, property, new_value)?;
    Ok(document.to_string())
}

/// Errors raised while mutating a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum MutateError {
    /// The document text is not valid JSON.
    #[error("invalid JSON in configuration item")]
    InvalidDocument(#[from] serde_json::Error),

    /// The path did not resolve to any node.
    #[error("the path '{path}' does not match any node")]
    PathNotFound {
        /// The path expression.
        path: String,
    },

    /// The path resolved to something other than an object.
    #[error("the path '{path}' does not specify a JSON object")]
    NotAnObject {
        /// The path expression.
        path: String,
    },

    /// The addressed object has no property with the configured name.
    #[error("the path '{path}' does not contain a property called '{property}'")]
    PropertyNotFound {
        /// The path expression.
        path: String,
        /// The missing property name.
        property: String,
    },

    /// The property is numeric and the replacement text does not parse.
    #[error("cannot replace {expected} property '{property}' with '{value}'")]
    InvalidReplacement {
        /// The property name.
        property: String,
        /// The replacement text that failed to parse.
        value: String,
        /// The kind of number that was expected.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(expr: &str) -> JsonPath {
        JsonPath::parse(expr).unwrap()
    }

    #[test]
    fn should_replace_string_property_verbatim() {
        let mut doc = json!({"values": {"mode": "eco"}});
        let outcome = set_property(&mut doc, &path("values"), "mode", "boost").unwrap();
        assert_eq!(outcome, MutationOutcome::Replaced);
        assert_eq!(doc, json!({"values": {"mode": "boost"}}));
    }

    #[test]
    fn should_replace_integer_property_by_parsing() {
        let mut doc = json!({"values": {"speed": 1200}});
        set_property(&mut doc, &path("values"), "speed", "900").unwrap();
        assert_eq!(doc["values"]["speed"], json!(900));
        assert!(doc["values"]["speed"].is_i64());
    }

    #[test]
    fn should_replace_float_property_by_parsing() {
        let mut doc = json!({"values": {"rate": 0.5}});
        set_property(&mut doc, &path("values"), "rate", "2.25").unwrap();
        assert_eq!(doc["values"]["rate"], json!(2.25));
        assert!(doc["values"]["rate"].is_f64());
    }

    #[test]
    fn should_keep_integer_type_for_integer_looking_float_input() {
        let mut doc = json!({"values": {"speed": 10}});
        let err = set_property(&mut doc, &path("values"), "speed", "9.5").unwrap_err();
        assert!(matches!(
            err,
            MutateError::InvalidReplacement {
                expected: "integer",
                ..
            }
        ));
        assert_eq!(doc, json!({"values": {"speed": 10}}));
    }

    #[test]
    fn should_reject_unparsable_integer_replacement() {
        let mut doc = json!({"values": {"speed": 10}});
        let err = set_property(&mut doc, &path("values"), "speed", "fast").unwrap_err();
        assert!(matches!(err, MutateError::InvalidReplacement { .. }));
        assert_eq!(doc["values"]["speed"], json!(10));
    }

    #[test]
    fn should_reject_unparsable_float_replacement() {
        let mut doc = json!({"values": {"rate": 0.5}});
        let err = set_property(&mut doc, &path("values"), "rate", "slow").unwrap_err();
        assert!(matches!(
            err,
            MutateError::InvalidReplacement {
                expected: "float",
                ..
            }
        ));
    }

    #[test]
    fn should_reject_non_finite_float_replacement() {
        let mut doc = json!({"values": {"rate": 0.5}});
        let err = set_property(&mut doc, &path("values"), "rate", "NaN").unwrap_err();
        assert!(matches!(err, MutateError::InvalidReplacement { .. }));
        assert_eq!(doc["values"]["rate"], json!(0.5));
    }

    #[test]
    fn should_leave_boolean_property_unchanged() {
        let mut doc = json!({"values": {"active": true}});
        let outcome = set_property(&mut doc, &path("values"), "active", "false").unwrap();
        assert_eq!(outcome, MutationOutcome::LeftUnchanged);
        assert_eq!(doc["values"]["active"], json!(true));
    }

    #[test]
    fn should_leave_object_property_unchanged() {
        let mut doc = json!({"values": {"nested": {"a": 1}}});
        let outcome = set_property(&mut doc, &path("values"), "nested", "x").unwrap();
        assert_eq!(outcome, MutationOutcome::LeftUnchanged);
        assert_eq!(doc["values"]["nested"], json!({"a": 1}));
    }

    #[test]
    fn should_fail_with_path_not_found() {
        let mut doc = json!({"values": {}});
        let err = set_property(&mut doc, &path("missing"), "mode", "x").unwrap_err();
        assert!(matches!(err, MutateError::PathNotFound { .. }));
        assert_eq!(doc, json!({"values": {}}));
    }

    #[test]
    fn should_fail_when_node_is_not_an_object() {
        let mut doc = json!({"values": [1, 2, 3]});
        let err = set_property(&mut doc, &path("values"), "mode", "x").unwrap_err();
        assert!(matches!(err, MutateError::NotAnObject { .. }));
    }

    #[test]
    fn should_fail_when_property_is_missing() {
        let mut doc = json!({"values": {"mode": "eco"}});
        let err = set_property(&mut doc, &path("values"), "speed", "1").unwrap_err();
        assert!(matches!(err, MutateError::PropertyNotFound { .. }));
        assert_eq!(doc, json!({"values": {"mode": "eco"}}));
    }

    #[test]
    fn should_leave_sibling_properties_untouched() {
        let mut doc = json!({"values": {"mode": "eco", "speed": 1200, "active": true}});
        set_property(&mut doc, &path("values"), "mode", "boost").unwrap();
        assert_eq!(doc["values"]["speed"], json!(1200));
        assert_eq!(doc["values"]["active"], json!(true));
    }

    #[test]
    fn should_mutate_document_text_end_to_end() {
        let json = r#"{"values":{"pump":{"speed":1200,"mode":"eco"}}}"#;
        let updated = mutate_document(json, &path("values.pump"), "speed", "900").unwrap();
        let reparsed: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(reparsed["values"]["pump"]["speed"], json!(900));
        assert_eq!(reparsed["values"]["pump"]["mode"], json!("eco"));
    }

    #[test]
    fn should_round_trip_mutated_type_and_value() {
        let json = r#"{"limits":{"max":3.5}}"#;
        let updated = mutate_document(json, &path("limits"), "max", "7.125").unwrap();
        let reparsed: Value = serde_json::from_str(&updated).unwrap();
        assert!(reparsed["limits"]["max"].is_f64());
        assert_eq!(reparsed["limits"]["max"], json!(7.125));
    }

    #[test]
    fn should_fail_on_invalid_document_text() {
        let err = mutate_document("{not json", &path("a"), "b", "c").unwrap_err();
        assert!(matches!(err, MutateError::InvalidDocument(_)));
    }

    #[test]
    fn should_mutate_node_addressed_through_array_index() {
        let json = r#"{"pumps":[{"speed":100},{"speed":200}]}"#;
        let updated = mutate_document(json, &path("pumps[1]"), "speed", "250").unwrap();
        let reparsed: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(reparsed["pumps"][1]["speed"], json!(250));
        assert_eq!(reparsed["pumps"][0]["speed"], json!(100));
    }
}
