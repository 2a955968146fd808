//! Builder pattern for constructing schema trees in code.
//!
//! This module provides an ergonomic fluent API for building [`SchemaNode`]
//! trees without going through a schema document, used heavily by tests and
//! by callers that define entity shapes programmatically.

use crate::{Constraint, Property, SchemaKind, SchemaNode};
use serde_json::Value;

/// Builder for creating a [`SchemaNode`].
///
/// # Example
///
/// ```rust
/// use schemas_core::SchemaBuilder;
///
/// let node = SchemaBuilder::object()
///     .title("Department")
///     .property("id", SchemaBuilder::integer().default(0).build())
///     .property(
///         "created_at",
///         SchemaBuilder::string().format("date-time").build(),
///     )
///     .require("id")
///     .require("created_at")
///     .build();
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    node: SchemaNode,
}

impl SchemaBuilder {
    /// Creates a builder for a node of the given kind.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            node: SchemaNode::new(kind),
        }
    }

    /// Creates a builder for an object node.
    pub fn object() -> Self {
        Self::new(SchemaKind::Object)
    }

    /// Creates a builder for a string node.
    pub fn string() -> Self {
        Self::new(SchemaKind::String)
    }

    /// Creates a builder for an integer node.
    pub fn integer() -> Self {
        Self::new(SchemaKind::Integer)
    }

    /// Creates a builder for a number node.
    pub fn number() -> Self {
        Self::new(SchemaKind::Number)
    }

    /// Creates a builder for a boolean node.
    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    /// Creates a builder for an array node.
    pub fn array() -> Self {
        Self::new(SchemaKind::Array)
    }

    /// Sets the informational title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.node.title = Some(title.into());
        self
    }

    /// Sets the informational description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.node.description = Some(description.into());
        self
    }

    /// Adds a child property schema. Declaration order is preserved.
    pub fn property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.node.properties.push(Property {
            name: name.into(),
            node,
        });
        self
    }

    /// Marks a property name as required.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.node.required.push(name.into());
        self
    }

    /// Sets the element schema for an array node.
    pub fn items(mut self, node: SchemaNode) -> Self {
        self.node.items = Some(Box::new(node));
        self
    }

    /// Sets the default value used when the field is absent.
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.node.default = Some(default.into());
        self
    }

    /// Sets the format name checked against the format registry.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.node.format = Some(format.into());
        self
    }

    /// Adds a documentation example.
    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.node.examples.push(example.into());
        self
    }

    /// Adds a keyword constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.node.constraints.push(constraint);
        self
    }

    /// Builds the schema node.
    ///
    /// The builder does not verify structural invariants (required names
    /// resolving to properties, defaults satisfying their own node); trees
    /// built in code are the caller's responsibility, while document loading
    /// verifies everything.
    pub fn build(self) -> SchemaNode {
        self.node
    }
}
