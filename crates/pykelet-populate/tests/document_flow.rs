//! End-to-end population of a loaded markup document.

use pykelet_content::{locate_all_blocks, locate_first_block, parse_block};
use pykelet_core::ConfigProvider;
use pykelet_document::{Document, parse_document};
use pykelet_populate::{PopulateOutcome, ReadySignal, bootstrap, initialize, populate_display_targets};

#[derive(Clone, Default)]
struct PageConfig {
    container_class: Option<String>,
    disabled: bool,
}

impl ConfigProvider for PageConfig {
    fn project_name(&self) -> &str {
        "pages"
    }

    fn container_class(&self) -> Option<&str> {
        self.container_class.as_deref()
    }

    fn population_disabled(&self) -> bool {
        self.disabled
    }
}

const PAGE: &str = r#"<!DOCTYPE html>
<!--PYKELET
DESCRIPTION: This tool helps identify the most important parts in a text.
TITLE:       Identify key phrases in a text.
URL:         https://example.com:8080/path
-->
<html>
<head><title id="TITLE">untitled</title></head>
<body>
<h1 id="TITLE-heading">Heading</h1>
<p id="DESCRIPTION">...</p>
<a id="URL"/>
<div>
<!--PYKELET
TITLE: nested and ignored
-->
</div>
</body>
</html>
"#;

fn text_of(doc: &Document, id: &str) -> String {
    doc.find_by_id(id).map(|el| el.text()).unwrap_or_default()
}

#[test]
fn test_bootstrap_then_ready_populates_document() {
    let mut doc = parse_document(PAGE).unwrap();
    let mut signal = ReadySignal::new();
    let state = bootstrap(doc.root(), PageConfig::default(), &mut signal);

    assert_eq!(state.get("TITLE"), Some("Identify key phrases in a text."));
    assert_eq!(text_of(&doc, "TITLE"), "untitled");

    signal.fire(&mut doc);

    assert_eq!(text_of(&doc, "TITLE"), "Identify key phrases in a text.");
    assert_eq!(text_of(&doc, "URL"), "https://example.com:8080/path");
    assert!(text_of(&doc, "DESCRIPTION").starts_with("This tool"));
    assert_eq!(text_of(&doc, "TITLE-heading"), "Heading");
}

#[test]
fn test_population_is_idempotent_on_document() {
    let mut doc = parse_document(PAGE).unwrap();
    let state = initialize(doc.root(), PageConfig::default());

    populate_display_targets(&state, &mut doc, false);
    let once = doc.to_string();
    populate_display_targets(&state, &mut doc, false);

    assert_eq!(doc.to_string(), once);
}

#[test]
fn test_opt_out_then_force() {
    let mut doc = parse_document(PAGE).unwrap();
    let config = PageConfig {
        disabled: true,
        ..Default::default()
    };
    let mut signal = ReadySignal::new();
    let state = bootstrap(doc.root(), config, &mut signal);

    signal.fire(&mut doc);
    assert_eq!(text_of(&doc, "TITLE"), "untitled");

    let outcome = populate_display_targets(&state, &mut doc, true);
    assert!(matches!(outcome, PopulateOutcome::Applied(_)));
    assert_eq!(text_of(&doc, "TITLE"), "Identify key phrases in a text.");
}

#[test]
fn test_no_block_leaves_document_untouched() {
    let markup = "<html><body><h1 id=\"TITLE\">keep</h1><!-- just a note --></body></html>";
    let mut doc = parse_document(markup).unwrap();
    let mut signal = ReadySignal::new();
    let state = bootstrap(doc.root(), PageConfig::default(), &mut signal);
    assert!(!state.has_metadata());

    signal.fire(&mut doc);
    assert_eq!(doc.to_string(), markup);
}

#[test]
fn test_nested_block_not_discovered() {
    let doc = parse_document("<html><body><!--PYKELET\nTITLE: deep\n--></body></html>").unwrap();
    assert!(locate_first_block(doc.root()).is_none());
}

#[test]
fn test_markdown_body_container_preferred() {
    let markup = r#"<html><body><article class="markdown-body"><!--PYKELET
TITLE: From container
--><h1 id="TITLE"></h1></article></body></html>"#;
    let mut doc = parse_document(markup).unwrap();
    let config = PageConfig {
        container_class: Some("markdown-body".into()),
        ..Default::default()
    };
    let state = initialize(doc.root(), config);
    assert_eq!(state.get("TITLE"), Some("From container"));

    populate_display_targets(&state, &mut doc, false);
    assert_eq!(text_of(&doc, "TITLE"), "From container");
}

#[test]
fn test_index_container_lists_every_block() {
    let markup = r#"<data id="INDEX">
<!--PYKELET
TITLE: First tool
FILENAME: first.html
-->
<!--PYKELET
TITLE: Second tool
FILENAME: second.html
-->
<!-- unrelated -->
</data>"#;
    let doc = parse_document(markup).unwrap();
    let container = doc.node_by_id("INDEX").unwrap();

    let blocks = locate_all_blocks(container);
    assert_eq!(blocks.len(), 2);

    let filenames: Vec<String> = blocks
        .into_iter()
        .filter_map(parse_block)
        .filter_map(|m| m.get("FILENAME").map(str::to_string))
        .collect();
    assert_eq!(filenames, vec!["first.html", "second.html"]);
}
