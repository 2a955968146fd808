//! Main validation engine.
//!
//! The engine walks a schema node and a candidate value in lock-step,
//! producing either a normalized value or the full ordered set of
//! violations. Validation is a pure, synchronous computation over in-memory
//! data: a loaded schema and a configured engine are safely shared read-only
//! across any number of concurrent calls.

use crate::{Aggregator, FormatRegistry, ValidationReport, apply_defaults, constraints};
use schemas_core::{
    FieldPath, SchemaKind, SchemaNode, ValidationOutcome, Violation, value_kind_name,
};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};

/// Schema-driven validation and normalization engine.
///
/// # Example
///
/// ```rust
/// use schemas_core::SchemaBuilder;
/// use schemas_validator::Engine;
/// use serde_json::json;
///
/// let schema = SchemaBuilder::object()
///     .property("id", SchemaBuilder::integer().default(0).build())
///     .property("name", SchemaBuilder::string().build())
///     .require("name")
///     .build();
///
/// let engine = Engine::new();
/// let outcome = engine.validate(&schema, json!({"name": "Diretoria"}));
///
/// assert_eq!(outcome.into_value(), Some(json!({"id": 0, "name": "Diretoria"})));
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    registry: FormatRegistry,
    deny_unknown: bool,
}

impl Engine {
    /// Creates an engine with the built-in format registry.
    pub fn new() -> Self {
        Self::with_registry(FormatRegistry::with_builtins())
    }

    /// Creates an engine with a caller-provided format registry.
    pub fn with_registry(registry: FormatRegistry) -> Self {
        Self {
            registry,
            deny_unknown: false,
        }
    }

    /// Reports properties not declared in the schema as violations instead
    /// of the default open-world lenience.
    pub fn deny_unknown_properties(mut self) -> Self {
        self.deny_unknown = true;
        self
    }

    /// Returns the engine's format registry.
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Validates a candidate value against a schema node.
    ///
    /// The input is consumed; the outcome carries a fresh normalized value
    /// on success. Violations are never raised as hard failures: an outcome
    /// is always returned, even when every field is invalid.
    pub fn validate(&self, node: &SchemaNode, value: Value) -> ValidationOutcome {
        self.validate_report(node, value).outcome
    }

    /// Validates a candidate and returns the full report, including
    /// warning-level notes (e.g. unknown formats) and pass statistics.
    pub fn validate_report(&self, node: &SchemaNode, value: Value) -> ValidationReport {
        let start = Instant::now();
        debug!(kind = %node.kind, "validating candidate value");

        let mut agg = Aggregator::new();
        let value = apply_defaults(node, value);
        let normalized = self.validate_node(node, value, &FieldPath::root(), &mut agg);
        agg.finish(normalized, start.elapsed())
    }

    /// Structural recursion over (node, value). Returns the normalized
    /// value for this subtree; violations accumulate in the aggregator.
    fn validate_node(
        &self,
        node: &SchemaNode,
        value: Value,
        path: &FieldPath,
        agg: &mut Aggregator,
    ) -> Value {
        agg.node_checked();

        // A mismatched node stops recursion: cascading errors on children
        // of a wrong-typed parent add no information.
        if !node.kind.matches(&value) {
            agg.record(Violation::type_mismatch(
                path.clone(),
                node.kind,
                value_kind_name(&value),
            ));
            return value;
        }

        constraints::check(node, &value, path, agg);

        match value {
            Value::Object(mut map) if node.kind == SchemaKind::Object => {
                // Required-ness means presence, checked only after defaults
                // have been applied to this subtree.
                for name in &node.required {
                    if !map.contains_key(name) {
                        agg.record(Violation::missing_required(path.key(name)));
                    }
                }

                for property in &node.properties {
                    if let Some(slot) = map.get_mut(&property.name) {
                        let child = std::mem::take(slot);
                        *slot =
                            self.validate_node(&property.node, child, &path.key(&property.name), agg);
                    }
                }

                if self.deny_unknown {
                    for name in map.keys() {
                        if node.property(name).is_none() {
                            agg.record(Violation::UnknownProperty {
                                path: path.key(name),
                            });
                        }
                    }
                }

                Value::Object(map)
            }

            Value::Array(elements) if node.kind == SchemaKind::Array => match &node.items {
                Some(items) => Value::Array(
                    elements
                        .into_iter()
                        .enumerate()
                        .map(|(index, element)| {
                            self.validate_node(items, element, &path.index(index), agg)
                        })
                        .collect(),
                ),
                None => Value::Array(elements),
            },

            Value::String(text) if node.kind == SchemaKind::String => {
                let Some(format) = &node.format else {
                    return Value::String(text);
                };
                match self.registry.lookup(format) {
                    Some(validator) => {
                        agg.format_checked();
                        match validator(&text) {
                            Ok(normalized) => Value::String(normalized),
                            Err(err) => {
                                agg.record(Violation::format_invalid(
                                    path.clone(),
                                    format,
                                    err.to_string(),
                                ));
                                Value::String(text)
                            }
                        }
                    }
                    None => {
                        // Forward compatibility: schemas may name formats
                        // this registry version does not know yet.
                        warn!(%format, %path, "unknown format, skipping check");
                        agg.warn(format!("unknown format '{format}' at {path}: check skipped"));
                        Value::String(text)
                    }
                }
            }

            other => other,
        }
    }
}

/// Validates with a one-shot engine carrying the built-in formats.
pub fn validate(node: &SchemaNode, value: Value) -> ValidationOutcome {
    Engine::new().validate(node, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemas_core::SchemaBuilder;
    use serde_json::json;

    fn record_schema() -> SchemaNode {
        SchemaBuilder::object()
            .property("id", SchemaBuilder::integer().build())
            .property(
                "created_at",
                SchemaBuilder::string().format("date-time").build(),
            )
            .property("name", SchemaBuilder::string().default("").build())
            .require("id")
            .require("created_at")
            .build()
    }

    #[test]
    fn test_valid_record_normalizes() {
        let outcome = validate(
            &record_schema(),
            json!({"id": 1, "created_at": "2020-04-01T05:44:26.542343+02:00"}),
        );
        assert_eq!(
            outcome.into_value(),
            Some(json!({
                "id": 1,
                "created_at": "2020-04-01T03:44:26.542343Z",
                "name": ""
            }))
        );
    }

    #[test]
    fn test_null_root_is_type_mismatch() {
        let outcome = validate(&record_schema(), json!(null));
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::type_mismatch(FieldPath::root(), SchemaKind::Object, "null")
        );
    }

    #[test]
    fn test_type_mismatch_stops_recursion() {
        let schema = SchemaBuilder::object()
            .property(
                "audit",
                SchemaBuilder::object()
                    .property("revision", SchemaBuilder::integer().build())
                    .require("revision")
                    .build(),
            )
            .build();

        // The wrong-typed subtree reports once; no cascading missing
        // 'revision' underneath it.
        let outcome = validate(&schema, json!({"audit": "wrong"}));
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::TypeMismatch { .. }));
        assert_eq!(violations[0].path().to_string(), "$.audit");
    }

    #[test]
    fn test_mismatched_field_not_also_missing() {
        let outcome = validate(
            &record_schema(),
            json!({"id": "1", "created_at": "2020-04-01T03:44:26.542343Z"}),
        );
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::type_mismatch(FieldPath::root().key("id"), SchemaKind::Integer, "string")
        );
    }

    #[test]
    fn test_fractional_number_rejected_for_integer() {
        let outcome = validate(
            &record_schema(),
            json!({"id": 1.5, "created_at": "2020-04-01T03:44:26.542343Z"}),
        );
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            Violation::TypeMismatch {
                expected: SchemaKind::Integer,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_string_satisfies_required_but_fails_format() {
        let schema = SchemaBuilder::object()
            .property("ts", SchemaBuilder::string().format("date-time").build())
            .require("ts")
            .build();

        let outcome = validate(&schema, json!({"ts": ""}));
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::FormatInvalid { .. }));
    }

    #[test]
    fn test_unknown_properties_allowed_by_default() {
        let outcome = validate(
            &record_schema(),
            json!({
                "id": 1,
                "created_at": "2020-04-01T03:44:26.542343Z",
                "notes": "x"
            }),
        );
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_deny_unknown_properties() {
        let engine = Engine::new().deny_unknown_properties();
        let outcome = engine.validate(
            &record_schema(),
            json!({
                "id": 1,
                "created_at": "2020-04-01T03:44:26.542343Z",
                "notes": "x"
            }),
        );
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::UnknownProperty {
                path: FieldPath::root().key("notes")
            }
        );
    }

    #[test]
    fn test_unknown_format_warns_not_violates() {
        let schema = SchemaBuilder::object()
            .property("zip", SchemaBuilder::string().format("postal-code").build())
            .build();

        let report = Engine::new().validate_report(&schema, json!({"zip": "12345"}));
        assert!(report.passed());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("postal-code"));
    }

    #[test]
    fn test_violation_ordering_follows_declaration_order() {
        let schema = SchemaBuilder::object()
            .property("first", SchemaBuilder::integer().build())
            .property("second", SchemaBuilder::string().build())
            .require("first")
            .require("second")
            .build();

        let outcome = validate(&schema, json!({"second": 3}));
        let violations = outcome.violations();
        // Missing-required checks run in required-list order, then the
        // present properties recurse in declaration order.
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].path().to_string(), "$.first");
        assert_eq!(violations[1].path().to_string(), "$.second");
        assert!(matches!(violations[0], Violation::MissingRequired { .. }));
        assert!(matches!(violations[1], Violation::TypeMismatch { .. }));
    }

    #[test]
    fn test_array_items_validated_with_index_paths() {
        let schema = SchemaBuilder::array()
            .items(SchemaBuilder::integer().build())
            .build();

        let outcome = validate(&schema, json!([1, "two", 3]));
        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path().to_string(), "$[1]");
    }

    #[test]
    fn test_idempotent_on_normalized_output() {
        let schema = record_schema();
        let input = json!({"id": 1, "created_at": "2020-04-01T05:44:26.542343+02:00"});

        let first = validate(&schema, input).into_value().expect("valid");
        let second = validate(&schema, first.clone()).into_value().expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_stats() {
        let report = Engine::new().validate_report(
            &record_schema(),
            json!({"id": 1, "created_at": "2020-04-01T03:44:26.542343Z"}),
        );
        assert!(report.passed());
        // Root plus the three declared properties.
        assert_eq!(report.stats.nodes_checked, 4);
        assert_eq!(report.stats.formats_checked, 1);
    }
}
