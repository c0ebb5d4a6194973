//! Shared fixtures for the populate tests.

use std::collections::HashMap;

use pykelet_core::{ConfigProvider, Metadata, PykeletState};

#[derive(Clone, Debug, Default)]
pub(crate) struct TestConfig {
    pub(crate) container_class: Option<String>,
    pub(crate) disabled: bool,
}

impl ConfigProvider for TestConfig {
    fn project_name(&self) -> &str {
        "test-project"
    }

    fn container_class(&self) -> Option<&str> {
        self.container_class.as_deref()
    }

    fn population_disabled(&self) -> bool {
        self.disabled
    }
}

pub(crate) fn metadata(pairs: &[(&str, &str)]) -> Metadata {
    let mut meta = Metadata::new();
    for (k, v) in pairs {
        meta.insert(k, v);
    }
    meta
}

pub(crate) fn state(disabled: bool, meta: Option<Metadata>) -> PykeletState<TestConfig> {
    PykeletState::new(
        TestConfig {
            container_class: None,
            disabled,
        },
        meta,
    )
}

pub(crate) fn targets(ids: &[&str]) -> HashMap<String, String> {
    ids.iter()
        .map(|id| ((*id).to_string(), "placeholder".to_string()))
        .collect()
}
