//! In-memory file system
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between a
//! generator and the test inspecting it. Every successful `write` is counted
//! per path.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    writes: HashMap<PathBuf, usize>,
    fail_writes: HashSet<PathBuf>,
}

/// Shared in-memory file system
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A poisoned lock only means another test thread panicked mid-write;
        // the maps are still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seed a file without counting it as a write
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.lock().files.insert(path.into(), content.into());
    }

    /// Delete a file
    pub fn remove(&self, path: &Path) {
        self.lock().files.remove(path);
    }

    /// Current content of `path`
    pub fn get(&self, path: &Path) -> Option<String> {
        self.lock().files.get(path).cloned()
    }

    /// Number of successful writes to `path`
    pub fn write_count(&self, path: &Path) -> usize {
        self.lock().writes.get(path).copied().unwrap_or(0)
    }

    /// Make every subsequent write to `path` fail (or succeed again)
    pub fn set_write_failure(&self, path: impl Into<PathBuf>, fail: bool) {
        let path = path.into();
        let mut state = self.lock();
        if fail {
            state.fail_writes.insert(path);
        } else {
            state.fail_writes.remove(&path);
        }
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.lock().dirs.contains(path)
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.lock()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let mut state = self.lock();
        if state.fail_writes.contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        *state.writes.entry(path.to_path_buf()).or_insert(0) += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut state = self.lock();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}
