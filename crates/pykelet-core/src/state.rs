//! Shared metadata state.
//!
//! Provides [`PykeletState<C>`], the context object that carries the parsed
//! metadata (or its absence) from initialization to population and to any
//! other consumer.
//!
//! # Design
//!
//! The state is written exactly once, when it is constructed, and is
//! read-only afterwards. There is no ambient global: whoever initializes
//! the state hands it (or a clone) to whatever needs it.
//!
//! # Example
//!
//! ```
//! use pykelet_core::{ConfigProvider, Metadata, PykeletState};
//!
//! #[derive(Clone)]
//! struct Config;
//!
//! impl ConfigProvider for Config {
//!     fn project_name(&self) -> &str { "site" }
//!     fn container_class(&self) -> Option<&str> { None }
//!     fn population_disabled(&self) -> bool { false }
//! }
//!
//! let mut metadata = Metadata::new();
//! metadata.insert("title", "Hello");
//!
//! let state = PykeletState::new(Config, Some(metadata));
//! assert_eq!(state.get("TITLE"), Some("Hello"));
//! ```

use std::sync::Arc;

use crate::metadata::Metadata;
use crate::traits::ConfigProvider;

/// Shared, read-only Pykelet state.
///
/// Generic over `C: ConfigProvider` so embedders can bring their own
/// configuration type. Both the configuration and the metadata live behind
/// `Arc`s, so cloning is cheap and clones observe the same values.
#[derive(Debug)]
pub struct PykeletState<C: ConfigProvider> {
    config: Arc<C>,
    metadata: Arc<Option<Metadata>>,
}

impl<C: ConfigProvider> PykeletState<C> {
    /// Create state from a configuration and the parse result.
    pub fn new(config: C, metadata: Option<Metadata>) -> Self {
        Self::from_arc(Arc::new(config), metadata)
    }

    /// Create state from an existing Arc-wrapped configuration.
    pub fn from_arc(config: Arc<C>, metadata: Option<Metadata>) -> Self {
        Self {
            config,
            metadata: Arc::new(metadata),
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Get a cloneable handle to the configuration.
    pub fn config_arc(&self) -> Arc<C> {
        Arc::clone(&self.config)
    }

    /// The parsed metadata, or `None` if no block was found.
    pub fn metadata(&self) -> Option<&Metadata> {
        (*self.metadata).as_ref()
    }

    /// Whether a metadata block was found.
    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Look up a single value by (uppercase) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata().and_then(|m| m.get(key))
    }
}

impl<C: ConfigProvider> Clone for PykeletState<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            metadata: Arc::clone(&self.metadata),
        }
    }
}
