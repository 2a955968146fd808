//! Keyword constraint checks.
//!
//! This module handles the constraint keywords a node may carry beyond its
//! kind:
//! - `enum`: value must be one of a predefined set
//! - `minimum`/`maximum`: numeric value must be within inclusive bounds
//! - `pattern`: string value must match a regex pattern
//!
//! Regexes are compiled once at schema-load time and live in the node, so
//! checking needs no mutable cache and the engine stays freely shareable.

use crate::Aggregator;
use schemas_core::{Constraint, FieldPath, SchemaNode, Violation};
use serde_json::Value;

/// Checks every constraint on `node` against a type-correct value.
///
/// Runs only after the kind check has passed; a constraint that does not
/// apply to the value's shape is skipped rather than reported, since the
/// shape disagreement is already the type check's responsibility.
pub(crate) fn check(node: &SchemaNode, value: &Value, path: &FieldPath, agg: &mut Aggregator) {
    for constraint in &node.constraints {
        match constraint {
            Constraint::Enum { values } => check_enum(values, value, path, agg),
            Constraint::Range { minimum, maximum } => {
                check_range(*minimum, *maximum, value, path, agg)
            }
            Constraint::Pattern { regex } => check_pattern(regex, value, path, agg),
        }
    }
}

fn check_enum(allowed: &[Value], value: &Value, path: &FieldPath, agg: &mut Aggregator) {
    if !allowed.iter().any(|candidate| values_equal(candidate, value)) {
        agg.record(Violation::NotInEnum {
            path: path.clone(),
            value: value.clone(),
        });
    }
}

/// Equality with numeric tolerance: `1` and `1.0` are the same enum member.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn check_range(
    minimum: Option<f64>,
    maximum: Option<f64>,
    value: &Value,
    path: &FieldPath,
    agg: &mut Aggregator,
) {
    let Some(number) = value.as_f64() else {
        return;
    };
    let low = minimum.unwrap_or(f64::NEG_INFINITY);
    let high = maximum.unwrap_or(f64::INFINITY);
    if number < low || number > high {
        agg.record(Violation::OutOfRange {
            path: path.clone(),
            value: number,
            minimum: low,
            maximum: high,
        });
    }
}

fn check_pattern(regex: &regex::Regex, value: &Value, path: &FieldPath, agg: &mut Aggregator) {
    let Some(text) = value.as_str() else {
        return;
    };
    if !regex.is_match(text) {
        agg.record(Violation::PatternMismatch {
            path: path.clone(),
            pattern: regex.as_str().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemas_core::SchemaBuilder;
    use serde_json::json;

    fn run(node: &SchemaNode, value: &Value) -> Vec<Violation> {
        let mut agg = Aggregator::new();
        check(node, value, &FieldPath::root(), &mut agg);
        agg.finish(value.clone(), std::time::Duration::ZERO)
            .outcome
            .violations()
            .to_vec()
    }

    #[test]
    fn test_enum_accepts_member() {
        let node = SchemaBuilder::string()
            .constraint(Constraint::Enum {
                values: vec![json!("active"), json!("inactive")],
            })
            .build();
        assert_eq!(run(&node, &json!("active")), vec![]);
    }

    #[test]
    fn test_enum_rejects_nonmember() {
        let node = SchemaBuilder::string()
            .constraint(Constraint::Enum {
                values: vec![json!("active"), json!("inactive")],
            })
            .build();
        let violations = run(&node, &json!("pending"));
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::NotInEnum { .. }));
    }

    #[test]
    fn test_enum_numeric_tolerance() {
        let node = SchemaBuilder::integer()
            .constraint(Constraint::Enum {
                values: vec![json!(1), json!(2)],
            })
            .build();
        assert_eq!(run(&node, &json!(1.0)), vec![]);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let node = SchemaBuilder::integer()
            .constraint(Constraint::Range {
                minimum: Some(0.0),
                maximum: Some(120.0),
            })
            .build();
        assert_eq!(run(&node, &json!(0)), vec![]);
        assert_eq!(run(&node, &json!(120)), vec![]);

        let violations = run(&node, &json!(150));
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::OutOfRange { .. }));
    }

    #[test]
    fn test_range_half_open() {
        let node = SchemaBuilder::number()
            .constraint(Constraint::Range {
                minimum: Some(0.0),
                maximum: None,
            })
            .build();
        assert_eq!(run(&node, &json!(1e12)), vec![]);
        assert_eq!(run(&node, &json!(-0.5)).len(), 1);
    }

    #[test]
    fn test_pattern() {
        let node = SchemaBuilder::string()
            .constraint(Constraint::pattern(r"^[a-z]+$").unwrap())
            .build();
        assert_eq!(run(&node, &json!("abc")), vec![]);

        let violations = run(&node, &json!("ABC"));
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], Violation::PatternMismatch { .. }));
    }
}
