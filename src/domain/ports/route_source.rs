//! RouteSource port - derives route candidates from the page tree
//!
//! Implementations must be deterministic for a given file-system snapshot
//! and must not write anything.

use crate::config::Config;
use crate::domain::entities::RouteEntry;
use crate::error::GenResult;
use crate::paths::GeneratorPaths;

/// Produces the ordered route candidates for a project
pub trait RouteSource {
    /// Entries in traversal order; duplicates are allowed
    fn routes(&self, paths: &GeneratorPaths, config: &Config) -> GenResult<Vec<RouteEntry>>;
}

impl<F> RouteSource for F
where
    F: Fn(&GeneratorPaths, &Config) -> GenResult<Vec<RouteEntry>>,
{
    fn routes(&self, paths: &GeneratorPaths, config: &Config) -> GenResult<Vec<RouteEntry>> {
        self(paths, config)
    }
}
