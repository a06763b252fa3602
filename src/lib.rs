//! xxpath - a restricted XPath-like engine for XML element trees.
//!
//! This crate resolves abbreviated path expressions such as
//! `a/b[2]/c[@id='x']` against an in-memory element tree, either reading the
//! matching nodes or, on request, creating the missing structure so a value
//! can be written at the addressed location.
//!
//! # Example
//!
//! ```
//! use xxpath::document::element::Element;
//! use xxpath::xpath::XmlPath;
//!
//! let mut root = Element::new("library")
//!     .with_child(Element::new("shelf").with_attribute("row", "1"));
//!
//! let path = XmlPath::compile("shelf[@row='1']/book").unwrap();
//! assert!(path.all(&root).is_empty());
//!
//! // Create mode materializes the missing <book> element.
//! let created = path.first_create(&mut root).unwrap();
//! assert_eq!(created.name(), "book");
//! ```

pub mod document;
pub mod xpath;
