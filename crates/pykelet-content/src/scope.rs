//! Scope selection.
//!
//! A [`ScopeSelector`] picks the node whose immediate children are searched
//! for a metadata block. Some renderers wrap user content in a container
//! element and move top-level comments inside it; [`ClassScope`] prefers
//! such a container when one exists.

use pykelet_core::HostNode;

/// Class of the wrapping container searched by default.
pub const DEFAULT_CONTAINER_CLASS: &str = "markdown-body";

/// Strategy choosing the search scope within a tree.
pub trait ScopeSelector {
    /// Return the node to search, given the tree root.
    fn select<'a, N: HostNode>(&self, root: &'a N) -> &'a N;
}

/// Search the root itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentScope;

impl ScopeSelector for DocumentScope {
    fn select<'a, N: HostNode>(&self, root: &'a N) -> &'a N {
        root
    }
}

/// Search the first descendant carrying a class, falling back to the root.
///
/// Descendants are visited depth-first in document order; the root itself
/// is not a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassScope {
    class: String,
}

impl ClassScope {
    /// Prefer the first element with `class`.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    /// The class being looked for.
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Default for ClassScope {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_CLASS)
    }
}

impl ScopeSelector for ClassScope {
    fn select<'a, N: HostNode>(&self, root: &'a N) -> &'a N {
        match find_descendant_with_class(root, &self.class) {
            Some(container) => {
                log::debug!("searching inside '.{}' container", self.class);
                container
            }
            None => root,
        }
    }
}

/// `None` searches the root; `Some(selector)` defers to the selector.
impl<S: ScopeSelector> ScopeSelector for Option<S> {
    fn select<'a, N: HostNode>(&self, root: &'a N) -> &'a N {
        match self {
            Some(selector) => selector.select(root),
            None => root,
        }
    }
}

fn find_descendant_with_class<'a, N: HostNode>(node: &'a N, class: &str) -> Option<&'a N> {
    for child in node.children() {
        if child.has_class(class) {
            return Some(child);
        }
        if let Some(found) = find_descendant_with_class(child, class) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tree::{classed, comment, element};

    #[test]
    fn test_document_scope_returns_root() {
        let doc = element(vec![classed("markdown-body", vec![])]);
        assert!(std::ptr::eq(DocumentScope.select(&doc), &doc));
    }

    #[test]
    fn test_class_scope_default_class() {
        assert_eq!(ClassScope::default().class(), "markdown-body");
    }

    #[test]
    fn test_class_scope_finds_nested_container() {
        let doc = element(vec![
            element(vec![]),
            element(vec![element(vec![classed(
                "markdown-body",
                vec![comment("inside")],
            )])]),
        ]);
        let scope = ClassScope::default().select(&doc);
        assert!(scope.has_class("markdown-body"));
    }

    #[test]
    fn test_class_scope_first_in_document_order() {
        let doc = element(vec![
            element(vec![classed("wrap", vec![comment("first")])]),
            classed("wrap", vec![comment("second")]),
        ]);
        let scope = ClassScope::new("wrap").select(&doc);
        let first = scope.children().next().and_then(|c| c.comment_text());
        assert_eq!(first, Some("first"));
    }

    #[test]
    fn test_class_scope_falls_back_to_root() {
        let doc = element(vec![element(vec![])]);
        assert!(std::ptr::eq(ClassScope::default().select(&doc), &doc));
    }

    #[test]
    fn test_class_scope_ignores_root_class() {
        let doc = classed("markdown-body", vec![]);
        assert!(std::ptr::eq(ClassScope::default().select(&doc), &doc));
    }

    #[test]
    fn test_option_scope() {
        let doc = element(vec![classed("markdown-body", vec![])]);
        let none: Option<ClassScope> = None;
        assert!(std::ptr::eq(none.select(&doc), &doc));

        let some = Some(ClassScope::default());
        assert!(some.select(&doc).has_class("markdown-body"));
    }
}
