//! Loading markup into a [`Document`].
//!
//! Built on the `quick-xml` event reader, relaxed for everyday HTML: end
//! tag names are not checked by the reader, void elements are closed
//! immediately, an end tag closes every element opened after its match,
//! and unmatched end tags are dropped. The content of raw-text elements
//! (`script`, `style`, `textarea`, `title`) is never tokenized; it is kept
//! verbatim up to the matching end tag.

use pykelet_core::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::node::{Document, Element, Node, is_void};

/// Elements whose content is text up to their own end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Parse markup into a [`Document`].
///
/// # Errors
///
/// Returns [`Error::Markup`] when the reader cannot make sense of the
/// input (e.g. an unterminated comment or tag).
///
/// # Example
///
/// ```
/// use pykelet_document::parse_document;
///
/// let doc = parse_document("<!--PYKELET\nTITLE: Hi\n--><h1 id=\"TITLE\"></h1>").unwrap();
/// assert_eq!(doc.children().len(), 2);
/// ```
pub fn parse_document(markup: &str) -> Result<Document> {
    let mut builder = TreeBuilder::default();
    // Byte offset of the current reader's input within `markup`.
    let mut base = 0;
    let mut reader = html_reader(markup);

    loop {
        let before = base + position(reader.buffer_position());
        let event = reader.read_event().map_err(|e| {
            Error::markup(format!(
                "at byte {}: {e}",
                base + position(reader.error_position())
            ))
        })?;

        match event {
            Event::Start(start) => {
                let element = element_from(&start, false);
                if element.is_void() {
                    builder.push(Node::Element(element));
                } else if is_raw_text(&element.name) {
                    let content_start = base + position(reader.buffer_position());
                    let rest = markup.get(content_start..).unwrap_or_default();
                    let len = raw_text_len(rest, &element.name);
                    builder.open(element);
                    if len > 0 {
                        builder.push(Node::Text(rest[..len].to_string()));
                    }
                    // Resume after the content so the end tag is read normally.
                    base = content_start + len;
                    reader = html_reader(markup.get(base..).unwrap_or_default());
                } else {
                    builder.open(element);
                }
            }
            Event::Empty(start) => builder.push(Node::Element(element_from(&start, true))),
            Event::End(end) => builder.close(&lossy(end.name().as_ref())),
            Event::Text(text) => builder.push(Node::Text(lossy(&text.into_inner()))),
            Event::Comment(text) => builder.push(Node::Comment(lossy(&text.into_inner()))),
            Event::CData(data) => builder.push(Node::CData(lossy(&data.into_inner()))),
            Event::DocType(text) => {
                let after = base + position(reader.buffer_position());
                let decl = markup
                    .get(before..after)
                    .and_then(|raw| raw.strip_prefix("<!"))
                    .and_then(|raw| raw.strip_suffix('>'))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("DOCTYPE {}", lossy(&text.into_inner()).trim()));
                builder.push(Node::Doctype(decl));
            }
            Event::Decl(_) | Event::PI(_) => {
                log::debug!("dropping processing instruction or XML declaration");
            }
            Event::Eof => break,
        }
    }

    Ok(builder.finish())
}

fn html_reader(markup: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    reader
}

fn position(pos: u64) -> usize {
    usize::try_from(pos).unwrap_or(usize::MAX)
}

fn is_raw_text(name: &str) -> bool {
    RAW_TEXT_ELEMENTS
        .iter()
        .any(|raw| raw.eq_ignore_ascii_case(name))
}

/// Length of the raw text at the start of `rest`, which runs to the first
/// `</name` end tag or, failing that, to the end of input.
fn raw_text_len(rest: &str, name: &str) -> usize {
    rest.match_indices("</")
        .map(|(i, _)| i)
        .find(|&i| is_end_tag_for(&rest[i + 2..], name))
        .unwrap_or(rest.len())
}

fn is_end_tag_for(tail: &str, name: &str) -> bool {
    let Some(candidate) = tail.get(..name.len()) else {
        return false;
    };
    candidate.eq_ignore_ascii_case(name)
        && tail[name.len()..]
            .chars()
            .next()
            .is_none_or(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn element_from(start: &BytesStart<'_>, self_closing: bool) -> Element {
    let mut element = Element::new(lossy(start.name().as_ref()));
    element.self_closing = self_closing;
    element.attributes = start
        .html_attributes()
        .flatten()
        .map(|attr| (lossy(attr.key.as_ref()), lossy(&attr.value)))
        .collect();
    element
}

/// Stack of open elements over the finished top-level nodes.
#[derive(Default)]
struct TreeBuilder {
    top: Vec<Node>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.top.push(node),
        }
    }

    fn open(&mut self, element: Element) {
        self.open.push(element);
    }

    fn close(&mut self, name: &str) {
        let Some(depth) = self
            .open
            .iter()
            .rposition(|el| el.name.eq_ignore_ascii_case(name))
        else {
            log::trace!("ignoring unmatched end tag </{name}>");
            return;
        };
        while self.open.len() > depth {
            self.close_innermost();
        }
    }

    fn close_innermost(&mut self) {
        if let Some(element) = self.open.pop() {
            self.push(Node::Element(element));
        }
    }

    fn finish(mut self) -> Document {
        if !self.open.is_empty() {
            log::debug!("closing {} unclosed element(s) at end of input", self.open.len());
        }
        while !self.open.is_empty() {
            self.close_innermost();
        }
        Document::new(self.top)
    }
}
