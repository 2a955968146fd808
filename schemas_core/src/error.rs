//! Hard errors for schema construction.
//!
//! Unlike [`Violation`](crate::Violation)s, which are soft values aggregated
//! across a validation pass, a `SchemaError` is fatal: schema loading is
//! all-or-nothing and surfaces the first structural problem immediately.

use crate::FieldPath;
use thiserror::Error;

/// Result type for schema-construction operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Error raised when a schema document itself is structurally invalid.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document violates the schema meta-shape, e.g. `required` lists a
    /// name not present in `properties`, `type` names an unrecognized kind,
    /// a `pattern` does not compile, or a `default` cannot satisfy its own
    /// node.
    #[error("malformed schema at {path}: {reason}")]
    Malformed { path: FieldPath, reason: String },
}

impl SchemaError {
    /// Creates a new malformed-schema error.
    pub fn malformed(path: FieldPath, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path,
            reason: reason.into(),
        }
    }
}
