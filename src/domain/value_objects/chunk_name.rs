//! Chunk name value object
//!
//! Bundlers name lazily loaded chunks after a comment in the dynamic import.
//! Deriving that name from the component path keeps output chunks stable
//! across rebuilds.

use std::fmt;
use std::path::Path;

/// Deterministic chunk identifier for a page component
///
/// `./src/pages/users/index.js` becomes `src__pages__users__index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkName(String);

impl ChunkName {
    /// Derive the chunk name from a component path
    pub fn from_component(component: &Path) -> Self {
        let raw = component.to_string_lossy();
        let trimmed = raw
            .strip_prefix("./")
            .or_else(|| raw.strip_prefix(".\\"))
            .unwrap_or(&raw);
        let joined = trimmed.replace(['/', '\\'], "__");
        let name = joined
            .strip_suffix(".jsx")
            .or_else(|| joined.strip_suffix(".js"))
            .unwrap_or(&joined);
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
