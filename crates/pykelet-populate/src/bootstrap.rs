//! Initialization and automatic population wiring.
//!
//! The intended order is:
//!
//! 1. [`initialize`] as soon as the document is available. This parses the
//!    metadata block once and produces the shared [`PykeletState`].
//! 2. [`register_population`] against the host's [`ReadySignal`], so the
//!    display targets are filled when the tree is complete.
//!
//! [`bootstrap`] does both.

use pykelet_content::{ClassScope, locate_in};
use pykelet_core::{ConfigProvider, HostNode, PykeletState, TargetResolver};

use crate::lifecycle::ReadySignal;
use crate::populator::{PopulateOutcome, populate_display_targets};

/// Locate and parse the metadata block under `root` and capture it in a
/// new state.
///
/// If the configuration names a container class, the first descendant with
/// that class is searched instead of `root` when it exists.
pub fn initialize<C, N>(root: &N, config: C) -> PykeletState<C>
where
    C: ConfigProvider,
    N: HostNode,
{
    let selector = config.container_class().map(ClassScope::new);
    let metadata = locate_in(root, &selector);
    match &metadata {
        Some(meta) => log::debug!("initialized metadata state with {} key(s)", meta.len()),
        None => log::debug!("initialized metadata state without a metadata block"),
    }
    PykeletState::new(config, metadata)
}

/// Subscribe automatic (non-forced) population to `signal`.
///
/// Returns `false` if the signal has already fired, in which case nothing
/// will run; call
/// [`populate_display_targets`](crate::populate_display_targets) with
/// `force = true` instead.
pub fn register_population<C, T>(state: &PykeletState<C>, signal: &mut ReadySignal<T>) -> bool
where
    C: ConfigProvider,
    T: TargetResolver + 'static,
{
    let state = state.clone();
    signal.subscribe(move |target: &mut T| {
        if let PopulateOutcome::Applied(report) = populate_display_targets(&state, target, false)
        {
            for key in &report.unmatched {
                log::trace!("metadata key '{key}' has no display target");
            }
        }
    })
}

/// Initialize state from `root` and register automatic population.
///
/// If `signal` has already fired the state is still returned, but nothing
/// will populate the targets; a warning is logged and the caller should
/// force population.
pub fn bootstrap<C, N, T>(root: &N, config: C, signal: &mut ReadySignal<T>) -> PykeletState<C>
where
    C: ConfigProvider,
    N: HostNode,
    T: TargetResolver + 'static,
{
    let state = initialize(root, config);
    if !register_population(&state, signal) {
        log::warn!(
            "ready signal already fired; display targets will not be populated automatically"
        );
    }
    state
}
