//! # Entity Schemas Core
//!
//! Core data structures for the schema-driven entity validation engine.
//!
//! This crate provides the immutable schema model consumed by the validator:
//! a tree of [`SchemaNode`]s describing the shape an entity must have, the
//! [`Violation`] taxonomy produced when a candidate value falls short, and
//! the document [`Path`]s that tie each violation back to the offending
//! field.
//!
//! ## Key Concepts
//!
//! - **Schema node**: one constraint unit (a type plus its sub-constraints)
//! - **Candidate value**: the structured input being checked, represented as
//!   a `serde_json::Value`
//! - **Violation**: one specific way a candidate fails a schema node
//! - **Outcome**: either a normalized value or the full, ordered violation
//!   list for the document
//!
//! ## Example
//!
//! ```rust
//! use schemas_core::{SchemaBuilder, SchemaKind};
//!
//! let department = SchemaBuilder::object()
//!     .title("Department")
//!     .property("id", SchemaBuilder::integer().default(0).build())
//!     .property("name", SchemaBuilder::string().default("").build())
//!     .require("id")
//!     .require("name")
//!     .build();
//!
//! assert_eq!(department.kind, SchemaKind::Object);
//! assert!(department.property("name").is_some());
//! ```

pub mod builder;
pub mod error;
pub mod node;
pub mod outcome;
pub mod path;

pub use builder::*;
pub use error::*;
pub use node::*;
pub use outcome::*;
pub use path::*;
