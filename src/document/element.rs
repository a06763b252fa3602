//! XML element representation.
//!
//! This module provides the `Element` type, the tree node the path engine
//! operates on. An element has a tag name, an insertion-ordered map of
//! string attributes, and an ordered list of child elements. The engine
//! needs nothing beyond child enumeration, name lookup, attribute get/set,
//! and child append, so that is the whole surface.
//!
//! # Example
//!
//! ```
//! use xxpath::document::element::Element;
//!
//! let mut root = Element::new("library");
//! root.append_child(
//!     Element::new("book")
//!         .with_attribute("isbn", "0-9752298-0-X")
//!         .with_child(Element::new("title")),
//! );
//!
//! assert_eq!(root.children().len(), 1);
//! assert_eq!(root.children()[0].attribute("isbn"), Some("0-9752298-0-X"));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A named element in an XML document tree.
///
/// Children are ordered; attributes keep insertion order and have unique
/// keys. Equality is structural over name, attributes, and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    /// Creates a new element with the given tag name and no attributes or
    /// children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Returns the element's tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the element's tag name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the value of the named attribute, if present.
    ///
    /// # Example
    ///
    /// ```
    /// use xxpath::document::element::Element;
    ///
    /// let elt = Element::new("point").with_attribute("x", "3");
    /// assert_eq!(elt.attribute("x"), Some("3"));
    /// assert_eq!(elt.attribute("y"), None);
    /// ```
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets an attribute, overwriting any existing value for the same key.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns the attribute map in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Returns the element's children in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns a mutable reference to the child list.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Appends a child element, returning a mutable reference to it.
    pub fn append_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        // Just pushed, so the list is non-empty.
        self.children.last_mut().unwrap()
    }

    /// Builder-style variant of [`set_attribute`](Self::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style variant of [`append_child`](Self::append_child).
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

/// Renders the element as XML text, mainly for diagnostics and test
/// assertions. Escapes the five predefined entities; no indentation.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, escape(value))?;
        }
        if self.children.is_empty() {
            write!(f, "/>")
        } else {
            write!(f, ">")?;
            for child in &self.children {
                write!(f, "{}", child)?;
            }
            write!(f, "</{}>", self.name)
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
