//! A minimal host tree for exercising the locator in tests.

use pykelet_core::HostNode;

#[derive(Debug, Clone)]
pub(crate) enum TestNode {
    Element {
        classes: Vec<String>,
        children: Vec<TestNode>,
    },
    Comment(String),
    Text(String),
}

pub(crate) fn element(children: Vec<TestNode>) -> TestNode {
    TestNode::Element {
        classes: vec![],
        children,
    }
}

pub(crate) fn classed(class: &str, children: Vec<TestNode>) -> TestNode {
    TestNode::Element {
        classes: vec![class.to_string()],
        children,
    }
}

pub(crate) fn comment(text: &str) -> TestNode {
    TestNode::Comment(text.to_string())
}

pub(crate) fn text(text: &str) -> TestNode {
    TestNode::Text(text.to_string())
}

impl HostNode for TestNode {
    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        match self {
            TestNode::Element { children, .. } => Box::new(children.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn comment_text(&self) -> Option<&str> {
        match self {
            TestNode::Comment(text) => Some(text),
            _ => None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        match self {
            TestNode::Element { classes, .. } => classes.iter().any(|c| c == class),
            _ => false,
        }
    }
}
