//! In-memory markup documents for Pykelet.
//!
//! [`Document`] is a host tree that implements the
//! [`pykelet_core::HostNode`] and [`pykelet_core::TargetResolver`]
//! capabilities, so it can be searched for metadata blocks and populated.
//!
//! # Modules
//!
//! - [`node`]: The tree types
//! - [`html`]: Loading markup into a tree
//! - [`render`]: Writing a tree back out as markup

#![doc = include_str!("../README.md")]

pub mod html;
pub mod node;
pub mod render;

pub use html::parse_document;
pub use node::{Document, Element, Node};
