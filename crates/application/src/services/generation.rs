//! Request generations for stale-response suppression
//!
//! Every user-triggered resolution begins a new generation. Work belonging
//! to an older generation can wait on [`GenerationTracker::superseded`] to
//! abort early, and must check [`GenerationTracker::is_current`] before
//! publishing anything.

use std::fmt;

use tokio::sync::watch;

/// Monotonically increasing request tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out generations and broadcasts the latest one
#[derive(Debug)]
pub struct GenerationTracker {
    latest: watch::Sender<u64>,
}

impl Default for GenerationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationTracker {
    /// Tracker starting at generation 0 (nothing requested yet)
    #[must_use]
    pub fn new() -> Self {
        let (latest, _) = watch::channel(0);
        Self { latest }
    }

    /// Start a new generation, superseding all earlier ones
    pub fn begin(&self) -> Generation {
        let mut next = 0;
        self.latest.send_modify(|latest| {
            *latest += 1;
            next = *latest;
        });
        Generation(next)
    }

    /// Latest generation handed out
    #[must_use]
    pub fn current(&self) -> Generation {
        Generation(*self.latest.borrow())
    }

    /// Whether `generation` is still the latest one
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        *self.latest.borrow() == generation.0
    }

    /// Completes once a newer generation than `generation` has begun
    pub async fn superseded(&self, generation: Generation) {
        let mut receiver = self.latest.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = receiver.wait_for(|latest| *latest != generation.0).await;
    }
}
