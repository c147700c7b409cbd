//! GeneratorPlugin port - extension hooks around generation
//!
//! Plugins run in registration order; the first error aborts the current
//! generation.

use crate::error::GenResult;
use crate::paths::GeneratorPaths;

/// A generator extension
pub trait GeneratorPlugin {
    /// Name used in error messages and logs
    fn name(&self) -> &str;

    /// Runs once at the start of a full `generate()`
    fn generate_entry(&self, _paths: &GeneratorPaths) -> GenResult<()> {
        Ok(())
    }

    /// Rewrites the raw router template before layout injection
    fn pre_build_router_content(
        &self,
        template: String,
        _paths: &GeneratorPaths,
    ) -> GenResult<String> {
        Ok(template)
    }
}
