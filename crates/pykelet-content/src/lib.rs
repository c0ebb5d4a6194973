//! Comment-block location and metadata parsing.
//!
//! This crate implements the read side of Pykelet: finding the marked
//! comment among a scope's immediate children and turning its body into a
//! [`Metadata`](pykelet_core::Metadata) mapping.
//!
//! # Features
//!
//! - Shallow, document-order discovery of marked comments
//! - First-colon `KEY: VALUE` parsing with key normalization
//! - Pluggable scope selection (document root or a wrapping container)

#![doc = include_str!("../README.md")]

pub mod locator;
pub mod parser;
pub mod scope;

pub use locator::{
    find_first_block, is_block, locate_all_blocks, locate_first_block, locate_in,
    parse_all_blocks, parse_block,
};
pub use parser::{is_block_text, parse_metadata_text};
pub use scope::{ClassScope, DEFAULT_CONTAINER_CLASS, DocumentScope, ScopeSelector};

#[cfg(test)]
pub(crate) mod test_tree;
