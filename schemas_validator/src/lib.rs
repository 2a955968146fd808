//! # Entity Schemas Validator
//!
//! Validation and normalization engine for entity schemas. This crate walks
//! a loaded schema tree and a candidate value in lock-step and produces
//! either a normalized value or the full, ordered set of violations:
//!
//! - Default injection (absent optional fields filled from schema defaults)
//! - Type checking (runtime shape against the node's kind)
//! - Required-property checking (presence, after defaults)
//! - Format checking (pluggable registry; `date-time`, `date`, `time`,
//!   `email` built in) with canonical normalization
//! - Keyword constraints (`enum`, `minimum`/`maximum`, `pattern`)
//!
//! ## Example
//!
//! ```rust
//! use schemas_core::SchemaBuilder;
//! use schemas_validator::Engine;
//! use serde_json::json;
//!
//! let schema = SchemaBuilder::object()
//!     .property(
//!         "created_at",
//!         SchemaBuilder::string().format("date-time").build(),
//!     )
//!     .require("created_at")
//!     .build();
//!
//! let outcome = Engine::new().validate(
//!     &schema,
//!     json!({"created_at": "2020-04-01T05:44:26.542343+02:00"}),
//! );
//!
//! // Offsets fold to canonical UTC in the normalized value.
//! assert_eq!(
//!     outcome.into_value(),
//!     Some(json!({"created_at": "2020-04-01T03:44:26.542343Z"}))
//! );
//! ```

mod aggregate;
mod constraints;
mod defaults;
mod engine;
mod formats;

pub use aggregate::*;
pub use defaults::*;
pub use engine::*;
pub use formats::*;
