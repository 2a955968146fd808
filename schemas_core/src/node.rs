//! Schema node types and structures.
//!
//! This module contains the immutable in-memory representation of a schema:
//! a tree of [`SchemaNode`]s, each carrying a [`SchemaKind`], its child
//! properties, and the constraints a candidate value must satisfy.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The primitive kind a schema node constrains its value to.
///
/// Maps the schema document's `type` keyword onto a closed tagged variant,
/// giving exhaustive-match safety when new kinds are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Object with named properties
    Object,
    /// UTF-8 string, optionally format-checked
    String,
    /// Integral number (a numeric value with a nonzero fractional part does
    /// not match, and is never truncated)
    Integer,
    /// Any numeric value
    Number,
    /// Boolean value
    Boolean,
    /// Array of elements, optionally constrained by an `items` node
    Array,
}

impl SchemaKind {
    /// Parses a `type` keyword into a kind, if recognized.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "object" => Some(Self::Object),
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    /// Returns the keyword name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }

    /// Returns true if the runtime shape of `value` matches this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Object => value.is_object(),
            Self::String => value.is_string(),
            Self::Integer => is_integral(value),
            Self::Number => value.is_number(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `value` is a number with no fractional part.
fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0 && f.is_finite())
        }
        _ => false,
    }
}

/// Returns the kind name of a candidate value's runtime shape.
///
/// Used in violation messages; integral numbers report as `integer`.
pub fn value_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) if is_integral(value) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A validation constraint beyond the node's kind.
///
/// These map onto the schema keywords `enum`, `minimum`/`maximum`, and
/// `pattern`. New keywords extend this enum without redesigning the engine.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Value must equal one of the listed values
    Enum {
        /// The allowed values
        values: Vec<Value>,
    },

    /// Numeric value must fall within the inclusive bounds
    Range {
        /// Minimum value (inclusive), unbounded if absent
        minimum: Option<f64>,
        /// Maximum value (inclusive), unbounded if absent
        maximum: Option<f64>,
    },

    /// String value must match the regex pattern
    Pattern {
        /// Compiled at schema-load time; a malformed pattern is a load error
        regex: Regex,
    },
}

impl Constraint {
    /// Compiles a `pattern` constraint from its source text.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern {
            regex: Regex::new(pattern)?,
        })
    }
}

/// A named child schema of an object node.
///
/// Properties keep their declaration order; the order never affects whether
/// a value validates, only the deterministic ordering of violations.
#[derive(Debug, Clone)]
pub struct Property {
    /// Property name
    pub name: String,

    /// Schema the property's value must satisfy
    pub node: SchemaNode,
}

/// One constraint unit in a schema tree.
///
/// A `SchemaNode` owns its children outright; schema trees contain no cycles,
/// so no arena or index indirection is needed. Trees are constructed once at
/// schema-load time and are immutable and freely shareable thereafter.
#[derive(Debug, Clone)]
pub struct SchemaNode {
    /// The primitive kind this node constrains its value to
    pub kind: SchemaKind,

    /// Informational title; never affects validation
    pub title: Option<String>,

    /// Informational description; never affects validation
    pub description: Option<String>,

    /// Names of properties that must be present (object kind only); every
    /// name must correspond to an entry in `properties`
    pub required: Vec<String>,

    /// Child schemas by property name, in declaration order (object kind only)
    pub properties: Vec<Property>,

    /// Element schema applied to every array item (array kind only)
    pub items: Option<Box<SchemaNode>>,

    /// Value used to fill the field when absent from the input; must itself
    /// satisfy this node
    pub default: Option<Value>,

    /// Name of a format registry entry (e.g. `date-time`) applied to string
    /// values
    pub format: Option<String>,

    /// Documentation fixtures; ignored by validation
    pub examples: Vec<Value>,

    /// Additional keyword constraints (enum, range, pattern)
    pub constraints: Vec<Constraint>,
}

impl SchemaNode {
    /// Creates a bare node of the given kind with no constraints.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            title: None,
            description: None,
            required: Vec::new(),
            properties: Vec::new(),
            items: None,
            default: None,
            format: None,
            examples: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Looks up a child schema by property name.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.node)
    }

    /// Returns true if `name` is listed in `required`.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}
