//! World lifecycle states.

use std::fmt;

/// The lifecycle of a [`World`](crate::World).
///
/// `Created → Running → Stopped`. Stopped is terminal: a world runs at most
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Built but never started.
    Created,
    /// The tick loop thread is running.
    Running,
    /// Stopped for good.
    Stopped,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}
