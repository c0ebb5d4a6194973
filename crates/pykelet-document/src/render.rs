//! Writing a tree back out as markup.
//!
//! Rendering is the inverse of [`crate::html::parse_document`] for
//! everything the loader keeps: a document that was not modified renders
//! to the same markup, minus any dropped XML declarations.

use std::fmt;

use crate::node::{Document, Element, Node};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Document(children) => children.iter().try_for_each(|c| c.fmt(f)),
            Node::Element(el) => el.fmt(f),
            Node::Text(raw) => f.write_str(raw),
            Node::Comment(text) => write!(f, "<!--{text}-->"),
            Node::CData(data) => write!(f, "<![CDATA[{data}]]>"),
            Node::Doctype(decl) => write!(f, "<!{decl}>"),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            // Values are stored raw, so one originally quoted with `'` may
            // contain `"`.
            if value.contains('"') {
                write!(f, " {key}='{value}'")?;
            } else {
                write!(f, " {key}=\"{value}\"")?;
            }
        }
        if self.self_closing {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        if self.is_void() && self.children.is_empty() {
            return Ok(());
        }
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.name)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_document;
    use pykelet_core::TextSink;

    #[test]
    fn test_render_round_trip() {
        let markup = "<!DOCTYPE html>\n<!--PYKELET\nTITLE: x\n-->\n<html><head><meta charset=\"utf-8\"><title id=\"TITLE\">a &amp; b</title></head><body><br/><p class='q\"uote'>t</p></body></html>\n";
        let doc = parse_document(markup).unwrap();
        assert_eq!(doc.to_string(), markup);
    }

    #[test]
    fn test_render_round_trip_inline_script() {
        let markup = "<!doctype html>\n<html><head><script>if (a < b) { x(); }</script>\n<style>p > a { color: red; }</style></head><body><p id=\"A\">x</p></body></html>\n";
        let doc = parse_document(markup).unwrap();
        assert_eq!(doc.to_string(), markup);
    }

    #[test]
    fn test_render_set_text_escaped() {
        let mut doc = parse_document("<h1 id=\"TITLE\">old <b>bold</b></h1>").unwrap();
        doc.find_by_id_mut("TITLE").unwrap().set_text("<Fish> & chips");
        assert_eq!(
            doc.to_string(),
            "<h1 id=\"TITLE\">&lt;Fish&gt; &amp; chips</h1>"
        );
    }

    #[test]
    fn test_render_self_closing_target_expands() {
        let mut doc = parse_document("<span id=\"AUTHOR\"/>").unwrap();
        doc.find_by_id_mut("AUTHOR").unwrap().set_text("Someone");
        assert_eq!(doc.to_string(), "<span id=\"AUTHOR\">Someone</span>");
    }

    #[test]
    fn test_render_built_element() {
        let el = Element::new("p")
            .with_attribute("id", "A&B")
            .with_child(Node::Comment(" note ".into()));
        assert_eq!(el.to_string(), "<p id=\"A&amp;B\"><!-- note --></p>");
    }
}
