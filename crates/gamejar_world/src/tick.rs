//! Fixed-tick scheduling.
//!
//! [`TickScheduler`] decides, for a given instant, whether the next tick is
//! due. It never sleeps itself, so the loop thread can wait however it likes
//! and tests can feed it synthetic instants.
//!
//! The `dt` handed out is the real time since the previous tick, not the
//! nominal interval. A tick delayed by scheduling jitter reports a
//! proportionally larger `dt`, which keeps simulated motion tied to wall time.

use std::time::{Duration, Instant};

/// What the loop should do at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDecision {
    /// The next tick is not due yet; wait at most this long before polling again.
    Wait(Duration),
    /// Run a tick now.
    Tick {
        /// One-based tick counter.
        tick_id: u64,
        /// Real time elapsed since the previous tick.
        elapsed: Duration,
    },
}

/// Tracks tick boundaries for a fixed nominal interval.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
    tick_id: u64,
}

impl TickScheduler {
    /// Create a scheduler whose first tick is due `interval` after `start`.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
            tick_id: 0,
        }
    }

    /// Returns the nominal time between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks issued so far.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// The instant of the most recent tick (or the start instant).
    #[must_use]
    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Decide whether a tick is due at `now`. Issuing a tick moves the tick
    /// boundary to `now`.
    pub fn poll(&mut self, now: Instant) -> TickDecision {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return TickDecision::Wait(self.interval - elapsed);
        }
        self.last_tick = now;
        self.tick_id += 1;
        TickDecision::Tick {
            tick_id: self.tick_id,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_waits_until_interval() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(MS * 16, t0);
        assert_eq!(scheduler.poll(t0), TickDecision::Wait(MS * 16));
        assert_eq!(scheduler.poll(t0 + MS * 10), TickDecision::Wait(MS * 6));
        assert_eq!(scheduler.tick_id(), 0);
    }

    #[test]
    fn test_reports_actual_elapsed_not_nominal() {
        // 60 ticks/s is a 16 ms interval; the third tick stalls to 34 ms.
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(MS * 16, t0);
        let mut elapsed = Vec::new();
        for at in [16, 32, 66] {
            match scheduler.poll(t0 + MS * at) {
                TickDecision::Tick { elapsed: e, .. } => elapsed.push(e),
                TickDecision::Wait(w) => panic!("unexpected wait of {w:?} at {at} ms"),
            }
        }
        assert_eq!(elapsed, vec![MS * 16, MS * 16, MS * 34]);
        assert_eq!(scheduler.tick_id(), 3);
    }

    #[test]
    fn test_boundary_moves_to_actual_tick_time() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(MS * 16, t0);
        assert!(matches!(
            scheduler.poll(t0 + MS * 40),
            TickDecision::Tick { tick_id: 1, .. }
        ));
        assert_eq!(scheduler.last_tick(), t0 + MS * 40);
        assert_eq!(scheduler.poll(t0 + MS * 50), TickDecision::Wait(MS * 6));
    }

    #[test]
    fn test_clock_behind_start_waits_full_interval() {
        let t0 = Instant::now() + MS * 100;
        let mut scheduler = TickScheduler::new(MS * 16, t0);
        assert_eq!(scheduler.poll(t0 - MS * 5), TickDecision::Wait(MS * 16));
    }
}
