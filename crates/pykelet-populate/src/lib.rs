//! Metadata state initialization and display-target population.
//!
//! # Modules
//!
//! - [`bootstrap`]: Initialization and automatic population wiring
//! - [`lifecycle`]: One-shot [`ReadySignal`]
//! - [`populator`]: Writing metadata values into display targets

#![doc = include_str!("../README.md")]

pub mod bootstrap;
pub mod lifecycle;
pub mod populator;

pub use bootstrap::{bootstrap, initialize, register_population};
pub use lifecycle::ReadySignal;
pub use populator::{PopulateOutcome, PopulateReport, apply_metadata, populate_display_targets};

#[cfg(test)]
pub(crate) mod test_support;
