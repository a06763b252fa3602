//! Stateless selection and creation operations, one element at a time.
//!
//! Each operation works on a single parent element and reports matching (or
//! newly created) children by child index, so the evaluator can address
//! nodes without holding borrows into the tree. Lifting to whole context
//! sets is the evaluator's job.

use super::ast::Segment;
use super::error::XmlPathError;
use crate::document::element::Element;

/// Returns the indices of `node`'s children matched by `segment`, in
/// document order.
pub fn select(node: &Element, segment: &Segment) -> Vec<usize> {
    match segment {
        Segment::Name(name) => by_name(node, name),
        Segment::AttrEq { name, attr, value } => by_name_and_attr(node, name, attr, value),
        Segment::Indexed(name, index) => by_name_and_index(node, name, *index),
        Segment::Wildcard => (0..node.children().len()).collect(),
    }
}

/// Creates (or reuses) the child needed to make `segment` resolvable under
/// `node`, returning the index of the child that becomes the next frontier.
///
/// Precondition: a read pass already failed to match `segment` here. The
/// tree is mutated immediately; nothing is rolled back on a later error.
pub fn create(node: &mut Element, segment: &Segment) -> Result<usize, XmlPathError> {
    match segment {
        Segment::Name(name) => Ok(append_named(node, name)),
        Segment::AttrEq { name, attr, value } => {
            // Reuse the first child with the right name whatever its current
            // attributes: a write-intent path names the desired final
            // attribute state, not a filter on the existing one.
            let index = match by_name(node, name).first() {
                Some(&existing) => existing,
                None => append_named(node, name),
            };
            node.children_mut()[index].set_attribute(attr, value);
            Ok(index)
        }
        Segment::Indexed(name, index) => create_indexed(node, name, *index),
        Segment::Wildcard => Err(XmlPathError::Create {
            message: "cannot create an element for a wildcard step".to_string(),
        }),
    }
}

fn by_name(node: &Element, name: &str) -> Vec<usize> {
    node.children()
        .iter()
        .enumerate()
        .filter(|(_, child)| child.name() == name)
        .map(|(index, _)| index)
        .collect()
}

fn by_name_and_attr(node: &Element, name: &str, attr: &str, value: &str) -> Vec<usize> {
    node.children()
        .iter()
        .enumerate()
        .filter(|(_, child)| child.name() == name && child.attribute(attr) == Some(value))
        .map(|(index, _)| index)
        .collect()
}

/// 1-based; index 0 or past-the-end selects nothing.
fn by_name_and_index(node: &Element, name: &str, index: usize) -> Vec<usize> {
    index
        .checked_sub(1)
        .and_then(|offset| by_name(node, name).get(offset).copied())
        .map(|child| vec![child])
        .unwrap_or_default()
}

fn create_indexed(node: &mut Element, name: &str, index: usize) -> Result<usize, XmlPathError> {
    if index == 0 {
        return Err(XmlPathError::Create {
            message: format!("cannot create '{}' at non-positive index 0", name),
        });
    }
    let existing = by_name(node, name).len();
    if index <= existing {
        // The read pass would have resolved this segment; reaching here
        // means the failure record is inconsistent with the tree.
        return Err(XmlPathError::Create {
            message: format!(
                "index {} of '{}' is already satisfied ({} present)",
                index, name, existing
            ),
        });
    }
    let mut last = node.children().len();
    for _ in existing..index {
        last = append_named(node, name);
    }
    Ok(last)
}

fn append_named(node: &mut Element, name: &str) -> usize {
    node.append_child(Element::new(name));
    node.children().len() - 1
}
