//! Writing metadata values into display targets.
//!
//! Each metadata key is looked up as an identifier through a
//! [`TargetResolver`]. A key with no matching target is skipped: documents
//! need not display every key. Population overwrites rather than appends,
//! so running it again with the same metadata changes nothing.

use pykelet_core::{ConfigProvider, Metadata, PykeletState, TargetResolver};

/// Which keys were written and which had no target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    /// Keys whose target text was set.
    pub applied: Vec<String>,
    /// Keys with no target of that identifier.
    pub unmatched: Vec<String>,
}

/// Result of a population attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateOutcome {
    /// Population is disabled in the configuration and was not forced.
    Disabled,
    /// The state holds no metadata.
    NoMetadata,
    /// Metadata was applied.
    Applied(PopulateReport),
}

impl PopulateOutcome {
    /// The report, if metadata was applied.
    pub fn report(&self) -> Option<&PopulateReport> {
        match self {
            PopulateOutcome::Applied(report) => Some(report),
            _ => None,
        }
    }
}

/// Apply the state's metadata to the targets reachable through `resolver`.
///
/// Unless `force` is set, does nothing when the configuration disables
/// population. Never fails; every skipped step is only logged.
pub fn populate_display_targets<C, R>(
    state: &PykeletState<C>,
    resolver: &mut R,
    force: bool,
) -> PopulateOutcome
where
    C: ConfigProvider,
    R: TargetResolver + ?Sized,
{
    if !force && state.config().population_disabled() {
        log::debug!("display-target population disabled by configuration");
        return PopulateOutcome::Disabled;
    }

    let Some(metadata) = state.metadata() else {
        log::debug!("no metadata to populate");
        return PopulateOutcome::NoMetadata;
    };

    let report = apply_metadata(metadata, resolver);
    log::debug!(
        "populated {} display target(s), {} key(s) without a target",
        report.applied.len(),
        report.unmatched.len()
    );
    PopulateOutcome::Applied(report)
}

/// Write every `(key, value)` of `metadata` into the target named `key`.
pub fn apply_metadata<R>(metadata: &Metadata, resolver: &mut R) -> PopulateReport
where
    R: TargetResolver + ?Sized,
{
    let mut report = PopulateReport::default();
    for (key, value) in metadata {
        match resolver.resolve(key) {
            Some(target) => {
                target.set_text(value);
                report.applied.push(key.to_string());
            }
            None => {
                log::trace!("no display target with id '{key}'");
                report.unmatched.push(key.to_string());
            }
        }
    }
    report
}
