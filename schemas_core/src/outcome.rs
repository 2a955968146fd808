//! Validation outcomes and the violation taxonomy.
//!
//! Violations are plain values, never raised as hard failures: a validation
//! pass always produces a whole-document report so a caller can present
//! every problem at once.

use crate::{FieldPath, SchemaKind};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// One specific way a candidate value fails to satisfy a schema node.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Value's runtime shape disagrees with the schema kind
    #[error("type mismatch at {path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: SchemaKind,
        actual: &'static str,
    },

    /// Required property absent after default application
    #[error("required property missing at {path}")]
    MissingRequired { path: FieldPath },

    /// Value matches the primitive type but fails the named format's own
    /// validation
    #[error("invalid '{format}' value at {path}: {message}")]
    FormatInvalid {
        path: FieldPath,
        format: String,
        message: String,
    },

    /// Value is not one of the values allowed by an `enum` keyword
    #[error("value {value} at {path} is not one of the allowed values")]
    NotInEnum { path: FieldPath, value: Value },

    /// Numeric value falls outside the inclusive `minimum`/`maximum` bounds
    #[error("value {value} at {path} outside range [{minimum}, {maximum}]")]
    OutOfRange {
        path: FieldPath,
        value: f64,
        minimum: f64,
        maximum: f64,
    },

    /// String value does not match a `pattern` keyword
    #[error("value at {path} does not match pattern '{pattern}'")]
    PatternMismatch { path: FieldPath, pattern: String },

    /// Property not declared in the schema, reported only when the engine is
    /// configured to deny unknown properties
    #[error("unknown property at {path}")]
    UnknownProperty { path: FieldPath },
}

impl Violation {
    /// Creates a new type mismatch violation.
    pub fn type_mismatch(path: FieldPath, expected: SchemaKind, actual: &'static str) -> Self {
        Self::TypeMismatch {
            path,
            expected,
            actual,
        }
    }

    /// Creates a new missing required property violation.
    pub fn missing_required(path: FieldPath) -> Self {
        Self::MissingRequired { path }
    }

    /// Creates a new format violation.
    pub fn format_invalid(
        path: FieldPath,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::FormatInvalid {
            path,
            format: format.into(),
            message: message.into(),
        }
    }

    /// Returns the document path this violation points at.
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::MissingRequired { path }
            | Self::FormatInvalid { path, .. }
            | Self::NotInEnum { path, .. }
            | Self::OutOfRange { path, .. }
            | Self::PatternMismatch { path, .. }
            | Self::UnknownProperty { path } => path,
        }
    }
}

/// The result of validating one candidate value against a schema.
///
/// Created fresh per validation call and owned solely by the caller after
/// return. A `Valid` outcome carries the normalized value: defaults filled
/// in and every format-normalizable field rewritten to its canonical form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// The candidate satisfied every constraint; holds the normalized value
    Valid(Value),
    /// The candidate failed; holds every violation, ordered depth-first,
    /// left-to-right by property declaration order
    Invalid(Vec<Violation>),
}

impl ValidationOutcome {
    /// Returns true if validation passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the normalized value, if validation passed.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the violations; empty for a valid outcome.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(violations) => violations,
        }
    }
}
