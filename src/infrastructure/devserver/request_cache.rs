//! Shared set of requested url paths
//!
//! The dev server marks a url the first time it serves it; the generator
//! reads the set when rendering in on-demand mode.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::domain::ports::RequestCache;

/// Thread-safe request cache; clones share the same set
#[derive(Debug, Clone, Default)]
pub struct SharedRequestCache {
    requested: Arc<RwLock<HashSet<String>>>,
}

impl SharedRequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` was requested; returns true on the first request
    pub fn mark_requested(&self, path: impl Into<String>) -> bool {
        let path = path.into();
        match self.requested.write() {
            Ok(mut set) => set.insert(path),
            Err(e) => e.into_inner().insert(path),
        }
    }

    pub fn len(&self) -> usize {
        match self.requested.read() {
            Ok(set) => set.len(),
            Err(e) => e.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RequestCache for SharedRequestCache {
    fn is_requested(&self, path: &str) -> bool {
        match self.requested.read() {
            Ok(set) => set.contains(path),
            Err(e) => e.into_inner().contains(path),
        }
    }
}
