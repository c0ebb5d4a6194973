//! Parsing of metadata block text.
//!
//! A block body looks like:
//!
//! ```text
//! PYKELET
//! DESCRIPTION: This tool helps identify the most important parts in a text.
//! TITLE:       Identify key phrases in a text.
//! FILENAME:    text_tool.html
//! ```
//!
//! The opening delimiter and marker, and the closing delimiter, are
//! stripped if present. Each remaining line is split at its first colon.

use std::sync::LazyLock;

use pykelet_core::{MARKER, Metadata};
use regex::Regex;

/// Opening delimiter (optional) followed by the marker token.
static OPENING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:<!--)?\s*{}\s*", regex::escape(MARKER)))
        .expect("opening pattern is a valid regex")
});

/// Closing delimiter, with any whitespace before it.
static CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-->\s*$").expect("closing pattern is a valid regex"));

/// Whether raw comment text qualifies as a metadata block.
///
/// The text must start with the marker token once surrounding whitespace
/// is trimmed.
pub fn is_block_text(raw: &str) -> bool {
    raw.trim().starts_with(MARKER)
}

/// Parse the text of a metadata block into a mapping.
///
/// Never fails. Lines without a usable key are dropped one at a time; a
/// block with no usable lines yields an empty mapping.
///
/// # Example
///
/// ```
/// use pykelet_content::parse_metadata_text;
///
/// let meta = parse_metadata_text("PYKELET\nurl: https://example.com:8080/path\n");
/// assert_eq!(meta.get("URL"), Some("https://example.com:8080/path"));
/// ```
pub fn parse_metadata_text(raw: &str) -> Metadata {
    let body = OPENING.replace(raw.trim(), "");
    let body = CLOSING.replace(&body, "");

    let mut metadata = Metadata::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line.split_once(':').unwrap_or((line, ""));
        if !metadata.insert(key, value) {
            log::trace!("skipping metadata line without a key: {line:?}");
        }
    }

    metadata
}
