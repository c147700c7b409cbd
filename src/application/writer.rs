//! Change-aware artifact writer
//!
//! Regenerating identical content must not touch the disk: the bundler
//! watches the output directory and would recompile on every write.

use tracing::debug;

use crate::domain::entities::{GeneratedArtifact, WriteOutcome};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ContentHash;
use crate::error::{GenError, GenResult};

/// Writes artifacts through a `FileSystem`, skipping unchanged content
pub struct ArtifactWriter<'a, FS: FileSystem> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem> ArtifactWriter<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Write `content` unless it matches what `artifact` last wrote
    ///
    /// The cache is only updated after the write succeeds.
    pub fn write_if_changed(
        &self,
        artifact: &mut GeneratedArtifact,
        content: &str,
    ) -> GenResult<WriteOutcome> {
        let hash = ContentHash::from_content(content);
        if !artifact.is_stale(&hash) {
            debug!(path = %artifact.output_path().display(), "content unchanged, skipping write");
            return Ok(WriteOutcome::Unchanged);
        }

        self.fs
            .write(artifact.output_path(), content)
            .map_err(|e| GenError::WriteFailed {
                path: artifact.output_path().to_path_buf(),
                message: e.to_string(),
            })?;
        artifact.mark_written(hash);
        debug!(path = %artifact.output_path().display(), bytes = content.len(), "wrote artifact");
        Ok(WriteOutcome::Written)
    }
}
