//! Cooperative stop request shared between a world and its loop thread.

use std::time::Duration;

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
pub(crate) struct StopSignal {
    requested: Mutex<bool>,
    cvar: Condvar,
}

impl StopSignal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to exit at its next checkpoint and wake it if it is waiting.
    pub(crate) fn request(&self) {
        *self.requested.lock() = true;
        self.cvar.notify_all();
    }

    pub(crate) fn is_requested(&self) -> bool {
        *self.requested.lock()
    }

    /// Block for up to `timeout`, returning early if a stop is requested.
    ///
    /// Returns whether a stop has been requested.
    pub(crate) fn wait_for(&self, timeout: Duration) -> bool {
        let mut requested = self.requested.lock();
        if !*requested {
            self.cvar.wait_for(&mut requested, timeout);
        }
        *requested
    }
}
