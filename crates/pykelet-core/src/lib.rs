//! Pykelet Core: shared types, traits, errors, and state.
//!
//! This crate provides the foundational types used across all Pykelet crates.
//! It has no internal Pykelet dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`metadata`]: The parsed key/value [`Metadata`] mapping
//! - [`state`]: The shared [`PykeletState`] context
//! - [`traits`]: Host capabilities and configuration abstraction

#![doc = include_str!("../README.md")]

pub mod error;
pub mod metadata;
pub mod state;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use metadata::{MARKER, Metadata};
pub use state::PykeletState;
pub use traits::{ConfigProvider, HostNode, TargetResolver, TextSink};
