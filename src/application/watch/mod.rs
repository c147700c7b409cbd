//! Change watching
//!
//! - `WatchSession` owns the `notify` handles for the watched roots
//! - `Debouncer` coalesces bursts of changes (100ms default)
//! - `ChangeWatcher` drives both and calls `on_settled` once per burst
//!
//! The loop polls its source with a short timeout so it can notice the
//! `running` flag being cleared by the Ctrl+C handler.

mod debounce;
mod session;


use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

pub use debounce::{DebounceState, Debouncer, DEBOUNCE_MS};
pub use session::{is_hidden, WatchSession};

/// How long a single poll of the change source may block
pub const POLL_INTERVAL_MS: u64 = 50;

/// Result of polling a change source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangePoll {
    /// A path changed
    Changed(PathBuf),
    /// Nothing arrived within the timeout
    Idle,
    /// The source will never produce another change
    Closed,
}

/// Anything that yields changed paths
pub trait ChangeSource {
    /// Wait up to `timeout` for the next change
    fn next_change(&mut self, timeout: Duration) -> ChangePoll;
}

/// Debounced change loop
pub struct ChangeWatcher<S: ChangeSource> {
    source: S,
    debouncer: Debouncer,
    poll_interval: Duration,
}

impl<S: ChangeSource> ChangeWatcher<S> {
    pub fn new(source: S, debounce: Duration) -> Self {
        Self {
            source,
            debouncer: Debouncer::new(debounce),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Run until `running` is cleared or the source closes
    ///
    /// `on_settled` receives the unique paths of each settled burst. A
    /// pending burst is dropped when the loop exits.
    pub fn run<F>(&mut self, running: &AtomicBool, mut on_settled: F)
    where
        F: FnMut(Vec<PathBuf>),
    {
        while running.load(Ordering::SeqCst) {
            let timeout = self
                .debouncer
                .remaining(Instant::now())
                .map(|left| left.min(self.poll_interval))
                .unwrap_or(self.poll_interval);

            match self.source.next_change(timeout) {
                ChangePoll::Changed(path) => {
                    debug!(path = %path.display(), "change");
                    self.debouncer.record(path, Instant::now());
                }
                ChangePoll::Idle => {}
                ChangePoll::Closed => break,
            }

            if let Some(changes) = self.debouncer.poll(Instant::now()) {
                debug!(count = changes.len(), "changes settled");
                on_settled(changes);
            }
        }
    }
}
