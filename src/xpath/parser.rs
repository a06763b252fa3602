//! Path string compiler.
//!
//! Splits a path on `/` and classifies each component into a [`Segment`].
//! Classification mirrors the grammar in the crate docs, tried in order:
//! attribute predicate, numeric index, wildcard, plain name.

use super::ast::{Segment, XmlPath};
use super::error::XmlPathError;

/// Compiler for path strings.
pub struct Parser;

impl Parser {
    /// Compiles the given path string into an [`XmlPath`].
    pub fn parse(path: &str) -> Result<XmlPath, XmlPathError> {
        // A path may optionally start with a separator; strip at most one.
        let body = path.strip_prefix('/').unwrap_or(path);

        if body.is_empty() {
            return Err(XmlPathError::Compile {
                component: path.to_string(),
                message: "path is empty".to_string(),
            });
        }

        let mut segments = Vec::new();
        for component in body.split('/') {
            segments.push(Self::classify(component)?);
        }

        Ok(XmlPath::new(path, segments))
    }

    /// Classifies one `/`-delimited component into a segment.
    fn classify(component: &str) -> Result<Segment, XmlPathError> {
        if component.is_empty() {
            return Err(XmlPathError::Compile {
                component: component.to_string(),
                message: "empty path component".to_string(),
            });
        }

        if component == "*" {
            return Ok(Segment::Wildcard);
        }

        match component.find('[') {
            Some(open) => Self::classify_bracketed(component, open),
            None if component.contains(']') => Err(XmlPathError::Compile {
                component: component.to_string(),
                message: "unbalanced brackets".to_string(),
            }),
            None => Ok(Segment::Name(component.to_string())),
        }
    }

    /// Classifies `name[@attr='value']` and `name[index]` components.
    fn classify_bracketed(component: &str, open: usize) -> Result<Segment, XmlPathError> {
        let compile_err = |message: &str| XmlPathError::Compile {
            component: component.to_string(),
            message: message.to_string(),
        };

        let inner = component[open + 1..]
            .strip_suffix(']')
            .ok_or_else(|| compile_err("unbalanced brackets"))?;
        let name = &component[..open];

        if name.is_empty() {
            return Err(compile_err("missing element name before '['"));
        }
        if name.contains(']') || inner.contains('[') || inner.contains(']') {
            return Err(compile_err("unbalanced brackets"));
        }

        if let Some(predicate) = inner.strip_prefix('@') {
            let (attr, quoted) = predicate
                .split_once('=')
                .ok_or_else(|| compile_err("attribute predicate must be @attr='value'"))?;
            if attr.is_empty() {
                return Err(compile_err("missing attribute name"));
            }
            let value = quoted
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
                .ok_or_else(|| compile_err("attribute value must be single-quoted"))?;
            return Ok(Segment::AttrEq {
                name: name.to_string(),
                attr: attr.to_string(),
                value: value.to_string(),
            });
        }

        let index = inner
            .parse::<usize>()
            .map_err(|_| compile_err("index must be a non-negative integer"))?;
        Ok(Segment::Indexed(name.to_string(), index))
    }
}
