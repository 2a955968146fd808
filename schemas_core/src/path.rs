//! Document paths addressing fields inside a candidate value.
//!
//! Violations never reference source code locations; they reference document
//! paths built from property names and array indices, rooted at `$`.

use serde::Serialize;
use std::fmt;

/// One step in a document path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object property name
    Key(String),
    /// Array element index
    Index(usize),
}

/// An ordered sequence of segments from the document root.
///
/// Paths render in a JSONPath-like form: the root is `$`, properties append
/// `.name`, and array elements append `[index]`.
///
/// # Example
///
/// ```rust
/// use schemas_core::FieldPath;
///
/// let path = FieldPath::root().key("tags").index(2);
/// assert_eq!(path.to_string(), "$.tags[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Creates a path pointing at the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns true if this path points at the document root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path extended with a property name.
    pub fn key(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(name.into()));
        Self(segments)
    }

    /// Returns a new path extended with an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Returns the segments of this path in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Key(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => write!(f, "{name}"),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_display() {
        assert_eq!(FieldPath::root().to_string(), "$");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn test_nested_display() {
        let path = FieldPath::root().key("schema").key("fields").index(0).key("name");
        assert_eq!(path.to_string(), "$.schema.fields[0].name");
        assert!(!path.is_root());
    }

    #[test]
    fn test_extension_does_not_mutate() {
        let base = FieldPath::root().key("a");
        let child = base.key("b");
        assert_eq!(base.to_string(), "$.a");
        assert_eq!(child.to_string(), "$.a.b");
        assert_eq!(child.segments().len(), 2);
    }
}
