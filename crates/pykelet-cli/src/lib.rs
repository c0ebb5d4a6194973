//! Command-line front end for Pykelet.
//!
//! # Key Abstractions
//!
//! - [`PykeletCli`]: application parameterized over a config provider
//! - [`PykeletConfig`]: TOML/env configuration loaded with `confyg`
//! - [`CliArgs`]: clap argument definitions

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod output;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::PykeletCli;
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand, OutputFormat};
pub use config::{PopulateConfig, PykeletConfig, ScopeConfig};
