//! Core traits for host abstraction.
//!
//! Pykelet never owns the document it reads. The host supplies three
//! capabilities through these traits:
//!
//! - [`HostNode`]: enumerate a node's immediate children and recognise
//!   comment nodes
//! - [`TargetResolver`]: look up a display target by identifier
//! - [`TextSink`]: overwrite a target's visible text
//!
//! [`ConfigProvider`] abstracts the configuration consulted during
//! initialization and population.

use std::collections::{BTreeMap, HashMap};

/// A node in the host document tree.
///
/// Only immediate children are ever enumerated by the locator; deeper
/// descendants are reached by the caller walking `children` itself.
///
/// # Example
///
/// ```
/// use pykelet_core::HostNode;
///
/// enum Node {
///     Comment(String),
///     Element(Vec<Node>),
/// }
///
/// impl HostNode for Node {
///     fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
///         match self {
///             Node::Element(children) => Box::new(children.iter()),
///             Node::Comment(_) => Box::new(std::iter::empty()),
///         }
///     }
///
///     fn comment_text(&self) -> Option<&str> {
///         match self {
///             Node::Comment(text) => Some(text),
///             Node::Element(_) => None,
///         }
///     }
///
///     fn has_class(&self, _class: &str) -> bool {
///         false
///     }
/// }
///
/// let root = Node::Element(vec![Node::Comment("PYKELET".into())]);
/// assert_eq!(root.children().count(), 1);
/// ```
pub trait HostNode {
    /// The node's immediate children, in document order.
    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_>;

    /// The raw text of this node if it is a comment, else `None`.
    fn comment_text(&self) -> Option<&str>;

    /// Whether this node carries the given class name.
    fn has_class(&self, class: &str) -> bool;
}

/// Something whose visible text can be replaced.
pub trait TextSink {
    /// Replace the visible text with `text`.
    ///
    /// Must overwrite rather than append, so repeated calls with the same
    /// value leave the same result.
    fn set_text(&mut self, text: &str);
}

/// Resolves display targets by identifier.
///
/// Identifiers are matched exactly (case-sensitive).
pub trait TargetResolver {
    /// Find the target named `id`, if any.
    fn resolve(&mut self, id: &str) -> Option<&mut dyn TextSink>;
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl TargetResolver for HashMap<String, String> {
    fn resolve(&mut self, id: &str) -> Option<&mut dyn TextSink> {
        self.get_mut(id).map(|s| s as &mut dyn TextSink)
    }
}

impl TargetResolver for BTreeMap<String, String> {
    fn resolve(&mut self, id: &str) -> Option<&mut dyn TextSink> {
        self.get_mut(id).map(|s| s as &mut dyn TextSink)
    }
}

/// Trait for Pykelet configuration.
///
/// The CLI implements this with a file/env backed configuration; embedders
/// and tests supply their own.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use pykelet_core::ConfigProvider;
///
/// #[derive(Clone)]
/// struct EmbeddedConfig;
///
/// impl ConfigProvider for EmbeddedConfig {
///     fn project_name(&self) -> &str {
///         "my-site"
///     }
///
///     fn container_class(&self) -> Option<&str> {
///         Some("markdown-body")
///     }
///
///     fn population_disabled(&self) -> bool {
///         false
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Class name of a wrapping container whose children should be
    /// searched instead of the document root, when present.
    ///
    /// `None` searches the document root only.
    fn container_class(&self) -> Option<&str>;

    /// Whether automatic population is suppressed.
    ///
    /// Forced population ignores this flag.
    fn population_disabled(&self) -> bool;
}
