//! Document tree types.
//!
//! Text, comment and attribute content is stored exactly as it appeared in
//! the markup (entities still escaped). Use [`Element::text`] for the
//! unescaped visible text.

use std::borrow::Cow;

use pykelet_core::{HostNode, TargetResolver, TextSink};
use quick_xml::escape::{escape, unescape};

/// A node in a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The document root.
    Document(Vec<Node>),
    /// An element with attributes and children.
    Element(Element),
    /// Raw (escaped) character data.
    Text(String),
    /// Comment content, without `<!--` and `-->`.
    Comment(String),
    /// A `<![CDATA[...]]>` section's content.
    CData(String),
    /// A doctype declaration as written between `<!` and `>`, e.g.
    /// `DOCTYPE html`.
    Doctype(String),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as written.
    pub name: String,
    /// Attributes in source order, values still escaped.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// Written as `<name/>`.
    pub self_closing: bool,
}

/// HTML elements that never have content or a closing tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `name` is an HTML void element.
pub(crate) fn is_void(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

impl Element {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Builder: add an attribute (value given unescaped).
    pub fn with_attribute(mut self, key: impl Into<String>, value: &str) -> Self {
        self.attributes.push((key.into(), escape(value).into_owned()));
        self
    }

    /// Builder: add a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Raw value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The element's raw (still escaped) `id`, if any.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Whether the unescaped `id` attribute equals `id` exactly.
    pub fn has_id(&self, id: &str) -> bool {
        self.id().is_some_and(|raw| unescape_or_raw(raw) == id)
    }

    /// Whether the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Whether this element is an HTML void element.
    pub fn is_void(&self) -> bool {
        is_void(&self.name)
    }

    /// Visible text of the element and its descendants, unescaped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(raw) => out.push_str(&unescape_or_raw(raw)),
            Node::CData(data) => out.push_str(data),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Document(children) => collect_text(children, out),
            Node::Comment(_) | Node::Doctype(_) => {}
        }
    }
}

/// Unescape entities, keeping the raw text when it holds entities
/// quick-xml does not know (e.g. `&nbsp;`).
fn unescape_or_raw(raw: &str) -> Cow<'_, str> {
    unescape(raw).unwrap_or(Cow::Borrowed(raw))
}

impl TextSink for Element {
    fn set_text(&mut self, text: &str) {
        self.children = vec![Node::Text(escape(text).into_owned())];
        self.self_closing = false;
    }
}

impl HostNode for Node {
    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        match self {
            Node::Document(children) => Box::new(children.iter()),
            Node::Element(el) => Box::new(el.children.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn comment_text(&self) -> Option<&str> {
        match self {
            Node::Comment(text) => Some(text),
            _ => None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        match self {
            Node::Element(el) => el.has_class(class),
            _ => false,
        }
    }
}

/// A loaded markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    /// Create a document from top-level nodes.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            root: Node::Document(children),
        }
    }

    /// The root node; its immediate children are the top-level nodes.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Top-level nodes.
    pub fn children(&self) -> &[Node] {
        match &self.root {
            Node::Document(children) => children,
            _ => &[],
        }
    }

    /// First element in document order whose `id` equals `id` exactly.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        find_element(self.children(), id)
    }

    /// Mutable form of [`Document::find_by_id`].
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        match &mut self.root {
            Node::Document(children) => find_element_mut(children, id),
            _ => None,
        }
    }

    /// The element with `id` wrapped as a [`Node`] reference, for use as a
    /// search scope.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        find_node(self.children(), id)
    }
}

fn find_element<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    match find_node(nodes, id) {
        Some(Node::Element(el)) => Some(el),
        _ => None,
    }
}

fn find_node<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.has_id(id) {
                return Some(node);
            }
            if let Some(found) = find_node(&el.children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_element_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            if el.has_id(id) {
                return Some(el);
            }
            if let Some(found) = find_element_mut(&mut el.children, id) {
                return Some(found);
            }
        }
    }
    None
}

impl TargetResolver for Document {
    fn resolve(&mut self, id: &str) -> Option<&mut dyn TextSink> {
        self.find_by_id_mut(id).map(|el| el as &mut dyn TextSink)
    }
}
