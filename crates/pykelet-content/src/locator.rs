//! Discovery of metadata blocks in a host tree.
//!
//! Discovery is shallow: only the immediate children of the scope node are
//! considered, in document order. Comments nested deeper are never
//! matched, even if their text is a valid block.

use pykelet_core::{HostNode, Metadata};

use crate::parser::{is_block_text, parse_metadata_text};
use crate::scope::ScopeSelector;

/// Whether `node` is a comment whose text qualifies as a metadata block.
pub fn is_block<N: HostNode>(node: &N) -> bool {
    node.comment_text().is_some_and(is_block_text)
}

/// Parse an explicitly supplied candidate node.
///
/// Returns `None` unless the node is a comment whose trimmed text starts
/// with the marker token. An unsuitable node is treated exactly like a
/// missing block.
pub fn parse_block<N: HostNode>(candidate: &N) -> Option<Metadata> {
    match candidate.comment_text() {
        Some(text) if is_block_text(text) => Some(parse_metadata_text(text)),
        Some(_) => {
            log::debug!("comment is not a metadata block");
            None
        }
        None => {
            log::debug!("candidate node is not a comment");
            None
        }
    }
}

/// Find the first metadata block among the immediate children of `scope`.
pub fn find_first_block<N: HostNode>(scope: &N) -> Option<&N> {
    scope.children().find(|child| is_block(*child))
}

/// Find and parse the first metadata block directly under `scope`.
///
/// Returns `None` if no qualifying comment exists. The mapping may be
/// empty if the block had no usable lines.
pub fn locate_first_block<N: HostNode>(scope: &N) -> Option<Metadata> {
    match find_first_block(scope) {
        Some(block) => parse_block(block),
        None => {
            log::debug!("no metadata block found in scope");
            None
        }
    }
}

/// Find and parse the first metadata block in the scope chosen by
/// `selector` for the tree rooted at `root`.
pub fn locate_in<N, S>(root: &N, selector: &S) -> Option<Metadata>
where
    N: HostNode,
    S: ScopeSelector,
{
    locate_first_block(selector.select(root))
}

/// Every metadata block among the immediate children of `container`, in
/// document order, unparsed.
///
/// Intended for index-style containers that hold many documents' blocks;
/// each result can be handed to [`parse_block`].
pub fn locate_all_blocks<N: HostNode>(container: &N) -> Vec<&N> {
    container.children().filter(|child| is_block(*child)).collect()
}

/// Parse every metadata block among the immediate children of `container`.
pub fn parse_all_blocks<N: HostNode>(container: &N) -> Vec<Metadata> {
    locate_all_blocks(container)
        .into_iter()
        .filter_map(parse_block)
        .collect()
}
