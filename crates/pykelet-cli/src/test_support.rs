//! Environment helpers shared by tests that read or write process env vars.

use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize access to the process environment.
///
/// Held by every test that sets `PYKELET_*` variables or loads
/// configuration (which reads them through the env overlay).
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// RAII guard for env var manipulation in tests.
pub(crate) struct EnvGuard {
    key: String,
    prev: Option<String>,
}

impl EnvGuard {
    pub(crate) fn new(key: &str, value: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers hold `env_lock()`, so no other test thread reads or
        // writes the environment concurrently.
        unsafe { std::env::set_var(key, value) };
        Self {
            key: key.to_string(),
            prev,
        }
    }

    pub(crate) fn remove(key: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: as in `new`.
        unsafe { std::env::remove_var(key) };
        Self {
            key: key.to_string(),
            prev,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: restores the value captured in `new`/`remove` while the
        // caller still holds `env_lock()`.
        unsafe {
            if let Some(ref val) = self.prev {
                std::env::set_var(&self.key, val);
            } else {
                std::env::remove_var(&self.key);
            }
        }
    }
}
