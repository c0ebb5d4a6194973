//! Rendering metadata for the terminal.

use pykelet_core::{Error, Metadata, Result};
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct Blocks<'a> {
    block: &'a [Metadata],
}

/// Render a single (possibly absent) mapping.
///
/// Absence renders as an empty string, `null` (JSON), or an empty document
/// (TOML).
pub fn render_metadata(metadata: Option<&Metadata>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(metadata.map(render_text).unwrap_or_default()),
        OutputFormat::Json => serde_json::to_string_pretty(&metadata)
            .map_err(|e| Error::serialization(e.to_string())),
        OutputFormat::Toml => match metadata {
            Some(meta) => {
                toml::to_string_pretty(meta).map_err(|e| Error::serialization(e.to_string()))
            }
            None => Ok(String::new()),
        },
    }
}

/// Render a sequence of mappings.
pub fn render_all(blocks: &[Metadata], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(blocks
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(blocks)
            .map_err(|e| Error::serialization(e.to_string())),
        OutputFormat::Toml => toml::to_string_pretty(&Blocks { block: blocks })
            .map_err(|e| Error::serialization(e.to_string())),
    }
}

/// `KEY: value` lines, the same shape the block was written in.
fn render_text(metadata: &Metadata) -> String {
    metadata
        .iter()
        .map(|(key, value)| format!("{key}: {value}\n"))
        .collect()
}
