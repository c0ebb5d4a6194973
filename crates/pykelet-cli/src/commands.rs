//! Handlers for the document commands: `show`, `list`, and `fill`.

use std::path::Path;

use pykelet_content::parse_all_blocks;
use pykelet_core::{ConfigProvider, Error, PykeletState, Result};
use pykelet_document::{Document, parse_document};
use pykelet_populate::{ReadySignal, bootstrap, initialize, populate_display_targets};

use crate::cli::OutputFormat;
use crate::output::{render_all, render_metadata};

/// Read and parse a markup document.
pub async fn load_document(path: &Path) -> Result<Document> {
    let markup = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    parse_document(&markup)
}

/// Metadata of the document at `path`, rendered in `format`.
pub async fn show<C: ConfigProvider>(
    config: &C,
    path: &Path,
    format: OutputFormat,
) -> Result<String> {
    let doc = load_document(path).await?;
    let state = initialize(doc.root(), config.clone());
    if !state.has_metadata() {
        log::warn!("no metadata block found in {}", path.display());
    }
    render_metadata(state.metadata(), format)
}

/// Every metadata block directly inside `container` (or the document root),
/// rendered in `format`.
pub async fn list(path: &Path, container: Option<&str>, format: OutputFormat) -> Result<String> {
    let doc = load_document(path).await?;
    let scope = match container {
        Some(id) => doc
            .node_by_id(id)
            .ok_or_else(|| Error::not_found(format!("container with id '{id}'")))?,
        None => doc.root(),
    };
    let blocks = parse_all_blocks(scope);
    log::info!("found {} metadata block(s) in {}", blocks.len(), path.display());
    render_all(&blocks, format)
}

/// Populate the document at `path` and return the resulting markup.
///
/// Runs the same sequence a host would: initialize, wait for the tree to be
/// complete, populate. With `force`, population also runs when the
/// configuration disables it.
pub async fn fill<C: ConfigProvider>(config: &C, path: &Path, force: bool) -> Result<String> {
    let mut doc = load_document(path).await?;

    let mut ready = ReadySignal::new();
    let state = bootstrap(doc.root(), config.clone(), &mut ready);
    ready.fire(&mut doc);

    if force {
        populate_display_targets(&state, &mut doc, true);
    } else if config.population_disabled() {
        log::info!("population disabled by configuration; use --force to override");
    }

    report_unmatched(&state, &doc);
    Ok(doc.to_string())
}

fn report_unmatched<C: ConfigProvider>(state: &PykeletState<C>, doc: &Document) {
    let Some(metadata) = state.metadata() else {
        log::warn!("no metadata block found; document left unchanged");
        return;
    };
    let unmatched: Vec<&str> = metadata
        .keys()
        .filter(|key| doc.find_by_id(key).is_none())
        .collect();
    if !unmatched.is_empty() {
        log::info!("keys without a matching id: {}", unmatched.join(", "));
    }
}
