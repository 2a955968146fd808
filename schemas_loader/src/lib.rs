//! Loader for entity schema documents (JSON/YAML/TOML formats).
//!
//! This crate turns an already-parsed structured document into the
//! strongly-typed, verified [`SchemaNode`] tree the engine consumes, and
//! provides the thin string/file parsing layer in front of it.
//!
//! Loading is all-or-nothing: the document's own shape is checked (`type`
//! names a recognized kind, `required` names resolve to `properties`,
//! `pattern`s compile) and every declared `default` is validated against its
//! own node, so a loaded schema is self-consistent by construction.
//!
//! # Example
//!
//! ```rust
//! use schemas_loader::parse_json;
//!
//! let document = r#"
//! {
//!     "type": "object",
//!     "title": "Department",
//!     "required": ["name"],
//!     "properties": {
//!         "id": {"type": "integer", "default": 0},
//!         "name": {"type": "string", "examples": ["Diretoria"]}
//!     }
//! }
//! "#;
//!
//! let schema = parse_json(document).expect("well-formed schema");
//! assert_eq!(schema.title.as_deref(), Some("Department"));
//! ```

use schemas_core::{Constraint, FieldPath, Property, SchemaError, SchemaKind, SchemaNode};
use schemas_validator::Engine;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a schema document.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// JSON parsing failed
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing failed
    #[error("failed to parse TOML: {0}")]
    Toml(String),

    /// File I/O error
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported file format
    #[error("unsupported schema file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("invalid or missing file extension")]
    InvalidExtension,

    /// The document parsed but is not a well-formed schema
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Supported schema document file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Builds a verified schema tree from an already-parsed document.
///
/// This is the engine-facing entry point: the caller obtained the document
/// however it likes (file, network, inline) and hands over the in-memory
/// value. Fails with [`SchemaError::Malformed`] on the first structural
/// problem, including a declared `default` that cannot satisfy its own node.
pub fn load_schema(document: &Value) -> std::result::Result<SchemaNode, SchemaError> {
    let node = build_node(document, &FieldPath::root())?;
    verify_defaults(&node)?;
    Ok(node)
}

/// Validates every `default` declared in a schema tree against its own node.
///
/// `load_schema` runs this automatically; it is exposed separately for
/// trees constructed in code via `SchemaBuilder`.
pub fn verify_defaults(node: &SchemaNode) -> std::result::Result<(), SchemaError> {
    let engine = Engine::new();
    verify_node_defaults(&engine, node, &FieldPath::root())
}

fn verify_node_defaults(
    engine: &Engine,
    node: &SchemaNode,
    path: &FieldPath,
) -> std::result::Result<(), SchemaError> {
    if let Some(default) = &node.default {
        let outcome = engine.validate(node, default.clone());
        if let Some(first) = outcome.violations().first() {
            return Err(SchemaError::malformed(
                path.key("default"),
                format!("default value does not satisfy its own schema: {first}"),
            ));
        }
    }
    for property in &node.properties {
        verify_node_defaults(
            engine,
            &property.node,
            &path.key("properties").key(&property.name),
        )?;
    }
    if let Some(items) = &node.items {
        verify_node_defaults(engine, items, &path.key("items"))?;
    }
    Ok(())
}

fn build_node(document: &Value, path: &FieldPath) -> std::result::Result<SchemaNode, SchemaError> {
    let Value::Object(doc) = document else {
        return Err(SchemaError::malformed(
            path.clone(),
            format!(
                "schema node must be an object, found {}",
                schemas_core::value_kind_name(document)
            ),
        ));
    };

    let kind = match doc.get("type") {
        None => {
            return Err(SchemaError::malformed(
                path.clone(),
                "missing 'type' keyword",
            ));
        }
        Some(Value::String(keyword)) => SchemaKind::parse(keyword).ok_or_else(|| {
            SchemaError::malformed(path.key("type"), format!("unrecognized type '{keyword}'"))
        })?,
        Some(_) => {
            return Err(SchemaError::malformed(
                path.key("type"),
                "'type' must be a string",
            ));
        }
    };

    let mut node = SchemaNode::new(kind);
    node.title = string_keyword(doc, "title", path)?;
    node.description = string_keyword(doc, "description", path)?;
    node.format = string_keyword(doc, "format", path)?;
    node.default = doc.get("default").cloned();

    if let Some(examples) = doc.get("examples") {
        let Value::Array(examples) = examples else {
            return Err(SchemaError::malformed(
                path.key("examples"),
                "'examples' must be an array",
            ));
        };
        node.examples = examples.clone();
    }

    if let Some(properties) = doc.get("properties") {
        if kind != SchemaKind::Object {
            return Err(SchemaError::malformed(
                path.key("properties"),
                format!("'properties' is only valid on object nodes, this node is {kind}"),
            ));
        }
        let Value::Object(properties) = properties else {
            return Err(SchemaError::malformed(
                path.key("properties"),
                "'properties' must be an object",
            ));
        };
        for (name, child) in properties {
            let child_path = path.key("properties").key(name);
            node.properties.push(Property {
                name: name.clone(),
                node: build_node(child, &child_path)?,
            });
        }
    }

    if let Some(required) = doc.get("required") {
        if kind != SchemaKind::Object {
            return Err(SchemaError::malformed(
                path.key("required"),
                format!("'required' is only valid on object nodes, this node is {kind}"),
            ));
        }
        let Value::Array(names) = required else {
            return Err(SchemaError::malformed(
                path.key("required"),
                "'required' must be an array of property names",
            ));
        };
        for (index, name) in names.iter().enumerate() {
            let Value::String(name) = name else {
                return Err(SchemaError::malformed(
                    path.key("required").index(index),
                    "required entries must be strings",
                ));
            };
            if node.property(name).is_none() {
                return Err(SchemaError::malformed(
                    path.key("required").index(index),
                    format!("required name '{name}' is not declared in properties"),
                ));
            }
            node.required.push(name.clone());
        }
    }

    if let Some(items) = doc.get("items") {
        if kind != SchemaKind::Array {
            return Err(SchemaError::malformed(
                path.key("items"),
                format!("'items' is only valid on array nodes, this node is {kind}"),
            ));
        }
        node.items = Some(Box::new(build_node(items, &path.key("items"))?));
    }

    if let Some(allowed) = doc.get("enum") {
        let Value::Array(values) = allowed else {
            return Err(SchemaError::malformed(
                path.key("enum"),
                "'enum' must be an array",
            ));
        };
        node.constraints.push(Constraint::Enum {
            values: values.clone(),
        });
    }

    let minimum = number_keyword(doc, "minimum", path)?;
    let maximum = number_keyword(doc, "maximum", path)?;
    if minimum.is_some() || maximum.is_some() {
        node.constraints.push(Constraint::Range { minimum, maximum });
    }

    if let Some(pattern) = doc.get("pattern") {
        let Value::String(pattern) = pattern else {
            return Err(SchemaError::malformed(
                path.key("pattern"),
                "'pattern' must be a string",
            ));
        };
        let constraint = Constraint::pattern(pattern).map_err(|e| {
            SchemaError::malformed(path.key("pattern"), format!("invalid pattern: {e}"))
        })?;
        node.constraints.push(constraint);
    }

    Ok(node)
}

fn string_keyword(
    doc: &serde_json::Map<String, Value>,
    keyword: &str,
    path: &FieldPath,
) -> std::result::Result<Option<String>, SchemaError> {
    match doc.get(keyword) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(SchemaError::malformed(
            path.key(keyword),
            format!("'{keyword}' must be a string"),
        )),
    }
}

fn number_keyword(
    doc: &serde_json::Map<String, Value>,
    keyword: &str,
    path: &FieldPath,
) -> std::result::Result<Option<f64>, SchemaError> {
    match doc.get(keyword) {
        None => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
            SchemaError::malformed(path.key(keyword), format!("'{keyword}' must be a number"))
        }),
    }
}

/// Parses a schema from a JSON string.
pub fn parse_json(content: &str) -> Result<SchemaNode> {
    let document: Value = serde_json::from_str(content)?;
    Ok(load_schema(&document)?)
}

/// Parses a schema from a YAML string.
pub fn parse_yaml(content: &str) -> Result<SchemaNode> {
    let document: Value = serde_yaml_ng::from_str(content)?;
    Ok(load_schema(&document)?)
}

/// Parses a schema from a TOML string.
pub fn parse_toml(content: &str) -> Result<SchemaNode> {
    let document: Value = toml::from_str(content).map_err(|e| LoaderError::Toml(e.to_string()))?;
    Ok(load_schema(&document)?)
}

/// Detects the schema document format from a file path's extension.
///
/// # Supported Extensions
///
/// * `.json` → [`SchemaFormat::Json`]
/// * `.yaml`, `.yml` → [`SchemaFormat::Yaml`]
/// * `.toml` → [`SchemaFormat::Toml`]
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(LoaderError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(SchemaFormat::Json),
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        "toml" => Ok(SchemaFormat::Toml),
        other => Err(LoaderError::UnsupportedFormat(other.to_string())),
    }
}

/// Parses a schema from a file with automatic format detection.
pub fn parse_file(path: &Path) -> Result<SchemaNode> {
    let content = std::fs::read_to_string(path)?;
    match detect_format(path)? {
        SchemaFormat::Json => parse_json(&content),
        SchemaFormat::Yaml => parse_yaml(&content),
        SchemaFormat::Toml => parse_toml(&content),
    }
}
