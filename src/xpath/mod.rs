//! Restricted path-expression compiler and evaluator.
//!
//! Path strings are an abbreviated, forward-only subset of XPath over
//! element trees. A path is compiled once into an [`XmlPath`] and can then
//! be evaluated any number of times, in read mode or in create mode.
//!
//! # Supported Syntax
//!
//! - `name` - child elements with the given tag name
//! - `name[2]` - the 2nd child with the given tag name (1-based)
//! - `name[@attr='value']` - children with the given tag name and attribute
//! - `*` - all children, regardless of name
//! - segments are joined with `/`; one leading `/` is permitted
//!
//! No axes, boolean predicates, functions, or namespaces are supported.
//!
//! # Examples
//!
//! ```
//! // a/b[2]/c[@id='x'] - the <c id="x"> under the second <b> under <a>
//! // signature/*        - every child of <signature>
//! // /library/shelf[3]  - equivalent to library/shelf[3]
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod selector;

pub use ast::{Segment, XmlPath};
pub use error::XmlPathError;
pub use parser::Parser;
