//! One-shot readiness signal.
//!
//! [`ReadySignal`] stands in for the host's "document tree is complete"
//! event. Callbacks subscribed before the signal fires run exactly once,
//! in subscription order, when it fires. The signal never fires twice.
//! If it never fires, its callbacks never run.

use std::fmt;

type Callback<T> = Box<dyn FnOnce(&mut T)>;

/// A fire-once event carrying mutable access to a target.
pub struct ReadySignal<T> {
    callbacks: Vec<Callback<T>>,
    fired: bool,
}

impl<T> ReadySignal<T> {
    /// Create a signal that has not fired.
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            fired: false,
        }
    }

    /// Register `callback` to run when the signal fires.
    ///
    /// Returns `false` if the signal has already fired; the callback is
    /// then dropped without running, as a late listener would never hear
    /// the event.
    pub fn subscribe<F>(&mut self, callback: F) -> bool
    where
        F: FnOnce(&mut T) + 'static,
    {
        if self.fired {
            log::warn!("ready signal already fired; dropping late subscriber");
            return false;
        }
        self.callbacks.push(Box::new(callback));
        true
    }

    /// Fire the signal, running every pending callback against `target`.
    ///
    /// Returns the number of callbacks run. Firing again runs nothing.
    pub fn fire(&mut self, target: &mut T) -> usize {
        if self.fired {
            log::debug!("ready signal already fired");
            return 0;
        }
        self.fired = true;

        let callbacks = std::mem::take(&mut self.callbacks);
        let count = callbacks.len();
        for callback in callbacks {
            callback(target);
        }
        count
    }

    /// Whether the signal has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Number of callbacks waiting for the signal.
    pub fn pending(&self) -> usize {
        self.callbacks.len()
    }
}

impl<T> Default for ReadySignal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ReadySignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadySignal")
            .field("pending", &self.callbacks.len())
            .field("fired", &self.fired)
            .finish()
    }
}
