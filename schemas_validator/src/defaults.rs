//! Default-value injection.
//!
//! Fills absent optional fields from schema-declared defaults ahead of the
//! engine's required-field check. Application is depth-first so nested
//! objects receive their own defaults before the parent subtree is checked:
//! a required nested object whose schema carries an object-level default of
//! `{}` becomes presentable for required-field checking only after its
//! default materializes.

use schemas_core::{SchemaKind, SchemaNode};
use serde_json::Value;

/// Returns a copy of `value` with schema-declared defaults filled in.
///
/// For an object node, every property declared in the schema but absent from
/// the value is inserted from its `default`, if one is declared; properties
/// absent from both are left absent (required-ness is checked downstream by
/// the engine, not here). The input is consumed, never mutated in place.
pub fn apply_defaults(node: &SchemaNode, value: Value) -> Value {
    match (node.kind, value) {
        (SchemaKind::Object, Value::Object(mut map)) => {
            for property in &node.properties {
                if !map.contains_key(&property.name) {
                    let Some(default) = &property.node.default else {
                        continue;
                    };
                    map.insert(property.name.clone(), default.clone());
                }
                // Recurse so freshly inserted defaults pick up their own
                // nested defaults too. In-place take/replace keeps the
                // map's key order intact.
                if let Some(slot) = map.get_mut(&property.name) {
                    let child = std::mem::take(slot);
                    *slot = apply_defaults(&property.node, child);
                }
            }
            Value::Object(map)
        }
        (SchemaKind::Array, Value::Array(elements)) => match &node.items {
            Some(items) => Value::Array(
                elements
                    .into_iter()
                    .map(|element| apply_defaults(items, element))
                    .collect(),
            ),
            None => Value::Array(elements),
        },
        // Scalar nodes and shape mismatches pass through untouched; the
        // engine reports mismatches as violations.
        (_, value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemas_core::SchemaBuilder;
    use serde_json::json;

    fn department_schema() -> SchemaNode {
        SchemaBuilder::object()
            .property("id", SchemaBuilder::integer().default(0).build())
            .property("name", SchemaBuilder::string().default("").build())
            .property("manager", SchemaBuilder::string().build())
            .build()
    }

    #[test]
    fn test_absent_fields_filled_from_defaults() {
        let value = apply_defaults(&department_schema(), json!({}));
        assert_eq!(value, json!({"id": 0, "name": ""}));
    }

    #[test]
    fn test_present_fields_never_overwritten() {
        let value = apply_defaults(&department_schema(), json!({"id": 7, "name": "Diretoria"}));
        assert_eq!(value, json!({"id": 7, "name": "Diretoria"}));
    }

    #[test]
    fn test_no_default_stays_absent() {
        let value = apply_defaults(&department_schema(), json!({}));
        assert_eq!(value.get("manager"), None);
    }

    #[test]
    fn test_nested_defaults_applied_depth_first() {
        let schema = SchemaBuilder::object()
            .property(
                "audit",
                SchemaBuilder::object()
                    .default(json!({}))
                    .property("revision", SchemaBuilder::integer().default(1).build())
                    .build(),
            )
            .build();

        // The object-level default {} materializes first, then its own
        // property defaults fill in beneath it.
        let value = apply_defaults(&schema, json!({}));
        assert_eq!(value, json!({"audit": {"revision": 1}}));
    }

    #[test]
    fn test_array_elements_receive_defaults() {
        let schema = SchemaBuilder::array()
            .items(
                SchemaBuilder::object()
                    .property("active", SchemaBuilder::boolean().default(true).build())
                    .build(),
            )
            .build();

        let value = apply_defaults(&schema, json!([{}, {"active": false}]));
        assert_eq!(value, json!([{"active": true}, {"active": false}]));
    }

    #[test]
    fn test_mismatched_shape_passes_through() {
        let value = apply_defaults(&department_schema(), json!("not an object"));
        assert_eq!(value, json!("not an object"));
    }
}
