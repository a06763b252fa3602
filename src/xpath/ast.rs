//! Segment model for compiled path expressions.

use super::error::XmlPathError;
use super::parser::Parser;

/// One typed step of a compiled path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Child elements by tag name (`name`)
    Name(String),
    /// The n-th child with a tag name, 1-based (`name[2]`)
    Indexed(String, usize),
    /// Children with a tag name and an exact attribute value
    /// (`name[@attr='value']`)
    AttrEq {
        name: String,
        attr: String,
        value: String,
    },
    /// All children regardless of name (`*`)
    Wildcard,
}

/// A compiled path expression.
///
/// Holds the source string and its ordered, non-empty segment list. The
/// expression is immutable after construction and can be evaluated any
/// number of times against different documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlPath {
    source: String,
    segments: Vec<Segment>,
}

impl XmlPath {
    pub(crate) fn new(source: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            source: source.into(),
            segments,
        }
    }

    /// Compiles a path string into an `XmlPath`.
    ///
    /// Compilation is a pure function of the string; it never looks at a
    /// document. Malformed paths fail with [`XmlPathError::Compile`].
    ///
    /// # Example
    ///
    /// ```
    /// use xxpath::xpath::{Segment, XmlPath};
    ///
    /// let path = XmlPath::compile("a/b[2]").unwrap();
    /// assert_eq!(path.segments().len(), 2);
    /// assert_eq!(path.segments()[1], Segment::Indexed("b".to_string(), 2));
    /// ```
    pub fn compile(path: &str) -> Result<Self, XmlPathError> {
        Parser::parse(path)
    }

    /// Returns the path string this expression was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the compiled segments in path order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
