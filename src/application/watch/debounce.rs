//! Debounce state machine
//!
//! `Idle → change → Pending(deadline) → change → Pending(new deadline) →
//! deadline elapses → Idle + fire`. Every change pushes the deadline back, so
//! a burst of edits settles into a single rebuild.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Default quiet period
pub const DEBOUNCE_MS: u64 = 100;

/// Debouncer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending { deadline: Instant },
}

/// Coalesces change notifications into settled batches
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    state: DebounceState,
    pending: BTreeSet<PathBuf>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: DebounceState::Idle,
            pending: BTreeSet::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Record a change observed at `now`, restarting the countdown
    pub fn record(&mut self, path: PathBuf, now: Instant) {
        self.pending.insert(path);
        self.state = DebounceState::Pending {
            deadline: now + self.window,
        };
    }

    /// Return the settled batch once the countdown has elapsed
    ///
    /// Paths are unique and sorted.
    pub fn poll(&mut self, now: Instant) -> Option<Vec<PathBuf>> {
        match self.state {
            DebounceState::Pending { deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                Some(std::mem::take(&mut self.pending).into_iter().collect())
            }
            _ => None,
        }
    }

    /// Time left before the pending batch settles
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            DebounceState::Pending { deadline } => Some(deadline.saturating_duration_since(now)),
            DebounceState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }
}
