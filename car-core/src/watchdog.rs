//! Directive staleness supervision
//!
//! Tracks the age of the last accepted directive against a fixed timeout so
//! the drive task can fail safe to neutral when the link goes quiet. Ticks
//! are the caller's monotonic time unit and must never decrease.

use defmt::Format;

/// Watchdog verdict for the current cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Freshness {
    /// A directive was accepted within the timeout window
    Fresh,
    /// The timeout elapsed with no new directive
    Stale,
}

/// Staleness watchdog owned by the drive task
pub struct StalenessWatchdog {
    timeout_ticks: u64,
    last_update: u64,
    state: Freshness,
}

impl StalenessWatchdog {
    /// Starts fresh, as if a directive had just been accepted at `now`.
    pub const fn new(timeout_ticks: u64, now: u64) -> Self {
        Self {
            timeout_ticks,
            last_update: now,
            state: Freshness::Fresh,
        }
    }

    /// Records an accepted directive; any staleness is cleared.
    pub fn feed(&mut self, now: u64) {
        self.last_update = now;
        self.state = Freshness::Fresh;
    }

    /// Re-evaluates and returns the state for the current tick.
    ///
    /// Goes stale once `now - last_update >= timeout` and stays stale until
    /// the next [`feed`](Self::feed).
    pub fn check(&mut self, now: u64) -> Freshness {
        if self.state == Freshness::Fresh
            && now.saturating_sub(self.last_update) >= self.timeout_ticks
        {
            self.state = Freshness::Stale;
        }
        self.state
    }

    pub fn state(&self) -> Freshness {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: u64 = 20;

    #[test]
    fn fresh_within_window() {
        let mut wd = StalenessWatchdog::new(TIMEOUT, 100);
        assert_eq!(wd.check(100), Freshness::Fresh);
        assert_eq!(wd.check(119), Freshness::Fresh);
    }

    #[test]
    fn goes_stale_at_exact_threshold() {
        let mut wd = StalenessWatchdog::new(TIMEOUT, 100);
        assert_eq!(wd.check(120), Freshness::Stale);
        // and stays stale
        assert_eq!(wd.check(121), Freshness::Stale);
    }

    #[test]
    fn feed_resets_window() {
        let mut wd = StalenessWatchdog::new(TIMEOUT, 100);
        wd.feed(115);
        assert_eq!(wd.check(130), Freshness::Fresh);
        assert_eq!(wd.check(135), Freshness::Stale);
    }

    #[test]
    fn feed_clears_staleness() {
        let mut wd = StalenessWatchdog::new(TIMEOUT, 100);
        assert_eq!(wd.check(200), Freshness::Stale);
        wd.feed(200);
        assert_eq!(wd.state(), Freshness::Fresh);
        assert_eq!(wd.check(210), Freshness::Fresh);
    }
}
