//! GeneratedArtifact entity - a file produced by the generator
//!
//! Each artifact remembers the hash of the content it last wrote so that
//! identical regenerations never touch the disk (and never wake up the
//! bundler's own watcher).

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Result of an attempted artifact write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content differed from the cache and was written
    Written,
    /// Content matched the cache; nothing was written
    Unchanged,
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written)
    }
}

/// A generated output file and its last-written content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    output_path: PathBuf,
    last_written: Option<ContentHash>,
}

impl GeneratedArtifact {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            last_written: None,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn last_written(&self) -> Option<&ContentHash> {
        self.last_written.as_ref()
    }

    /// True when `hash` differs from the last written content
    pub fn is_stale(&self, hash: &ContentHash) -> bool {
        self.last_written.as_ref() != Some(hash)
    }

    /// Record a successful write
    pub fn mark_written(&mut self, hash: ContentHash) {
        self.last_written = Some(hash);
    }

    /// Forget the cached content so the next write always hits the disk
    pub fn invalidate(&mut self) {
        self.last_written = None;
    }
}
