//! Dual-mode evaluation of compiled path expressions.
//!
//! Evaluation runs in two phases. The read phase applies the segments left
//! to right, mapping the matching selector over every node in the current
//! context set and flattening; an empty intermediate set aborts the pass
//! with a failure record instead of an exception. The create phase, entered
//! only on request after such a failure, walks the unresolved remainder from
//! the first frontier node, materializing one child per segment.
//!
//! Context sets are index routes (child-index walks from the root) rather
//! than node references, so the failure record stays valid once the create
//! phase takes mutable access to the tree.

use super::ast::{Segment, XmlPath};
use super::error::XmlPathError;
use super::selector;
use crate::document::element::Element;

/// An index route from the root to one node in the tree.
type NodeRoute = Vec<usize>;

/// Outcome of the read-only evaluation pass.
#[derive(Debug)]
enum ReadOutcome {
    /// Every segment matched; the final context set.
    Resolved(Vec<NodeRoute>),
    /// A segment matched nothing: the last non-empty context set (the
    /// frontier) and the offset of the failing segment, from which the
    /// unresolved remainder runs.
    Missing {
        frontier: Vec<NodeRoute>,
        failed_at: usize,
    },
}

fn evaluate_read(root: &Element, segments: &[Segment]) -> ReadOutcome {
    // The root itself is the initial single-route context set.
    let mut current: Vec<NodeRoute> = vec![Vec::new()];

    for (position, segment) in segments.iter().enumerate() {
        let mut next = Vec::new();
        for route in &current {
            let node = node_at(root, route);
            for child in selector::select(node, segment) {
                let mut child_route = route.clone();
                child_route.push(child);
                next.push(child_route);
            }
        }
        if next.is_empty() {
            // Nothing left to select from; later segments cannot match.
            return ReadOutcome::Missing {
                frontier: current,
                failed_at: position,
            };
        }
        current = next;
    }

    ReadOutcome::Resolved(current)
}

/// Materializes the unresolved remainder below the frontier node, returning
/// the route of the node the full path now resolves to.
///
/// Mutations are immediate; if a later segment fails, the children created
/// so far stay in the tree.
fn evaluate_create(
    root: &mut Element,
    frontier: &[usize],
    remainder: &[Segment],
) -> Result<NodeRoute, XmlPathError> {
    let mut route = frontier.to_vec();
    for segment in remainder {
        let node = node_at_mut(root, &route);
        let child = selector::create(node, segment)?;
        route.push(child);
    }
    Ok(route)
}

/// Resolves an index route produced by this evaluation to a node. Routes
/// only ever come from `evaluate_read`/`evaluate_create` against the same
/// tree, so every step is in bounds.
fn node_at<'a>(root: &'a Element, route: &[usize]) -> &'a Element {
    route
        .iter()
        .fold(root, |node, &child| &node.children()[child])
}

fn node_at_mut<'a>(root: &'a mut Element, route: &[usize]) -> &'a mut Element {
    route
        .iter()
        .fold(root, |node, &child| &mut node.children_mut()[child])
}

impl XmlPath {
    /// Returns every node the path resolves to under `root`, in document
    /// order. Returns an empty vector when the path does not resolve; a
    /// read never mutates the tree.
    ///
    /// # Example
    ///
    /// ```
    /// use xxpath::document::element::Element;
    /// use xxpath::xpath::XmlPath;
    ///
    /// let root = Element::new("doc")
    ///     .with_child(Element::new("entry"))
    ///     .with_child(Element::new("entry"));
    ///
    /// let path = XmlPath::compile("entry").unwrap();
    /// assert_eq!(path.all(&root).len(), 2);
    /// ```
    pub fn all<'a>(&self, root: &'a Element) -> Vec<&'a Element> {
        match evaluate_read(root, self.segments()) {
            ReadOutcome::Resolved(routes) => {
                routes.iter().map(|route| node_at(root, route)).collect()
            }
            ReadOutcome::Missing { .. } => Vec::new(),
        }
    }

    /// Like [`all`](Self::all), but on a failed read materializes the
    /// missing structure and returns the single node the path then resolves
    /// to.
    ///
    /// Creation anchors at the first node of the failure frontier and never
    /// fans out across multiple candidate parents. Errors with
    /// [`XmlPathError::Create`] when the remainder cannot be satisfied (for
    /// example a wildcard step); children created before the failing step
    /// remain in the tree.
    pub fn all_create<'a>(&self, root: &'a mut Element) -> Result<Vec<&'a Element>, XmlPathError> {
        let outcome = evaluate_read(root, self.segments());
        match outcome {
            ReadOutcome::Resolved(routes) => {
                let root: &'a Element = root;
                Ok(routes.iter().map(|route| node_at(root, route)).collect())
            }
            ReadOutcome::Missing {
                frontier,
                failed_at,
            } => {
                let created =
                    evaluate_create(root, &frontier[0], &self.segments()[failed_at..])?;
                Ok(vec![node_at(root, &created)])
            }
        }
    }

    /// Returns the first node the path resolves to, or
    /// [`XmlPathError::NotFound`] when it resolves to nothing.
    pub fn first<'a>(&self, root: &'a Element) -> Result<&'a Element, XmlPathError> {
        self.all(root)
            .into_iter()
            .next()
            .ok_or_else(|| self.not_found())
    }

    /// Returns the first node the path resolves to, or `None` when it
    /// resolves to nothing. Never errors.
    pub fn first_opt<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.all(root).into_iter().next()
    }

    /// Creating variant of [`first`](Self::first).
    pub fn first_create<'a>(&self, root: &'a mut Element) -> Result<&'a Element, XmlPathError> {
        self.all_create(root)?
            .into_iter()
            .next()
            .ok_or_else(|| self.not_found())
    }

    /// Calls `visit` once per resolved node, in document order. All nodes
    /// are resolved before the first visit.
    pub fn each<'a, F>(&self, root: &'a Element, mut visit: F)
    where
        F: FnMut(&'a Element),
    {
        for node in self.all(root) {
            visit(node);
        }
    }

    /// Creating variant of [`each`](Self::each).
    pub fn each_create<'a, F>(&self, root: &'a mut Element, mut visit: F) -> Result<(), XmlPathError>
    where
        F: FnMut(&'a Element),
    {
        for node in self.all_create(root)? {
            visit(node);
        }
        Ok(())
    }

    fn not_found(&self) -> XmlPathError {
        XmlPathError::NotFound {
            path: self.source().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// <doc><a><b/><b><c id="x"/></b></a></doc>
    fn sample_tree() -> Element {
        Element::new("doc").with_child(
            Element::new("a")
                .with_child(Element::new("b"))
                .with_child(Element::new("b").with_child(Element::new("c").with_attribute("id", "x"))),
        )
    }

    #[test]
    fn test_read_single_match() {
        let root = sample_tree();
        let path = XmlPath::compile("a/b[2]/c[@id='x']").unwrap();
        let nodes = path.all(&root);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name(), "c");
        assert_eq!(nodes[0].attribute("id"), Some("x"));
    }

    #[test]
    fn test_read_multiple_matches_in_order() {
        let root = sample_tree();
        let path = XmlPath::compile("a/b").unwrap();
        let nodes = path.all(&root);
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].children().is_empty());
        assert_eq!(nodes[1].children().len(), 1);
    }

    #[test]
    fn test_read_flattens_across_context_set() {
        // Both <b> elements contribute their children to the next context.
        let root = Element::new("doc").with_child(
            Element::new("a")
                .with_child(Element::new("b").with_child(Element::new("c").with_attribute("n", "1")))
                .with_child(Element::new("b").with_child(Element::new("c").with_attribute("n", "2"))),
        );
        let path = XmlPath::compile("a/b/c").unwrap();
        let nodes = path.all(&root);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].attribute("n"), Some("1"));
        assert_eq!(nodes[1].attribute("n"), Some("2"));
    }

    #[test]
    fn test_read_failure_yields_empty() {
        let root = sample_tree();
        let path = XmlPath::compile("a/nope/c[@id='x']").unwrap();
        assert!(path.all(&root).is_empty());
    }

    #[test]
    fn test_read_failure_record_marks_failing_segment() {
        let root = sample_tree();
        let path = XmlPath::compile("a/nope/c").unwrap();
        match evaluate_read(&root, path.segments()) {
            ReadOutcome::Missing {
                frontier,
                failed_at,
            } => {
                assert_eq!(failed_at, 1);
                // Frontier is the resolved <a> element.
                assert_eq!(frontier, vec![vec![0]]);
            }
            ReadOutcome::Resolved(_) => panic!("expected a failed read"),
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let root = sample_tree();
        let path = XmlPath::compile("a/b[2]/c[@id='x']").unwrap();
        let before = root.clone();
        let first = path.all(&root).len();
        let second = path.all(&root).len();
        assert_eq!(first, second);
        assert_eq!(root, before);
    }

    #[test]
    fn test_create_resumes_from_failure() {
        let mut root = sample_tree();
        let path = XmlPath::compile("a/b[2]/c[@id='x']/d").unwrap();
        let nodes = path.all_create(&mut root).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name(), "d");
    }

    #[test]
    fn test_create_then_read_round_trip() {
        let mut root = sample_tree();
        let path = XmlPath::compile("a/b[3]/e[@k='v']").unwrap();
        let created = path.all_create(&mut root).unwrap();
        assert_eq!(created.len(), 1);
        let reread = path.all(&root);
        assert_eq!(reread.len(), 1);
        assert_eq!(reread[0].name(), "e");
        assert_eq!(reread[0].attribute("k"), Some("v"));
    }

    #[test]
    fn test_create_on_resolved_path_reads_without_mutation() {
        let mut root = sample_tree();
        let before = root.clone();
        let path = XmlPath::compile("a/b[2]/c[@id='x']").unwrap();
        let nodes = path.all_create(&mut root).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(root, before);
    }

    #[test]
    fn test_create_wildcard_remainder_fails() {
        let mut root = sample_tree();
        let path = XmlPath::compile("a/missing/*").unwrap();
        let result = path.all_create(&mut root);
        assert!(matches!(result, Err(XmlPathError::Create { .. })));
    }

    #[test]
    fn test_failed_create_keeps_partial_mutation() {
        let mut root = sample_tree();
        let path = XmlPath::compile("a/missing/*").unwrap();
        assert!(path.all_create(&mut root).is_err());
        // <missing> was appended under <a> before the wildcard step failed.
        let partial = XmlPath::compile("a/missing").unwrap();
        assert_eq!(partial.all(&root).len(), 1);
    }

    #[test]
    fn test_first_returns_not_found() {
        let root = sample_tree();
        let path = XmlPath::compile("a/nope").unwrap();
        let err = path.first(&root).unwrap_err();
        assert!(matches!(err, XmlPathError::NotFound { .. }));
        assert!(err.to_string().contains("a/nope"));
    }

    #[test]
    fn test_first_opt_returns_none_sentinel() {
        let root = sample_tree();
        let path = XmlPath::compile("a/nope").unwrap();
        assert!(path.first_opt(&root).is_none());
    }

    #[test]
    fn test_first_picks_first_in_document_order() {
        let root = sample_tree();
        let path = XmlPath::compile("a/b").unwrap();
        let node = path.first(&root).unwrap();
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_each_visits_in_order_after_resolution() {
        let root = sample_tree();
        let path = XmlPath::compile("a/*").unwrap();
        let mut seen = Vec::new();
        path.each(&root, |node| seen.push(node.name().to_string()));
        assert_eq!(seen, vec!["b", "b"]);
    }

    #[test]
    fn test_each_create_visits_created_node() {
        let mut root = sample_tree();
        let path = XmlPath::compile("a/fresh").unwrap();
        let mut seen = Vec::new();
        path.each_create(&mut root, |node| seen.push(node.name().to_string()))
            .unwrap();
        assert_eq!(seen, vec!["fresh"]);
    }
}
