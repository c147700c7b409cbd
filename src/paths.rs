//! Project paths derived from configuration
//!
//! Every path the generator reads from or writes to is resolved once here,
//! so the rest of the crate never joins paths ad hoc.

use std::path::{Component, Path, PathBuf};

use crate::config::Config;

/// File name of the generated router module
pub const ROUTER_FILE: &str = "router.js";
/// File name of the generated service-worker registration module
pub const REGISTER_SW_FILE: &str = "registerServiceWorker.js";

/// Resolved project paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    /// Project root
    pub cwd: PathBuf,
    /// Pages directory
    pub pages: PathBuf,
    /// Conventional layout file (may not exist)
    pub layout: PathBuf,
    /// Temporary output directory, relative to `cwd`
    pub tmp_dir: PathBuf,
    /// Temporary output directory, absolute
    pub abs_tmp_dir: PathBuf,
    /// Generated router module
    pub router: PathBuf,
    /// Generated library entry module
    pub library_entry: PathBuf,
    /// Generated service-worker registration module
    pub register_sw: PathBuf,
}

impl GeneratorPaths {
    pub fn new(cwd: impl Into<PathBuf>, config: &Config) -> Self {
        let cwd = cwd.into();
        let abs_tmp_dir = cwd.join(&config.paths.tmp);
        Self {
            pages: cwd.join(&config.paths.pages),
            layout: cwd.join(&config.paths.layout),
            tmp_dir: config.paths.tmp.clone(),
            router: abs_tmp_dir.join(ROUTER_FILE),
            library_entry: abs_tmp_dir.join(format!("{}.js", config.library_name)),
            register_sw: abs_tmp_dir.join(REGISTER_SW_FILE),
            abs_tmp_dir,
            cwd,
        }
    }

    /// Directory containing the layout file
    pub fn layout_dir(&self) -> &Path {
        self.layout.parent().unwrap_or(&self.cwd)
    }

    /// Resolve a path relative to the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Import specifier for `component` as seen from the temporary directory
    pub fn import_path(&self, component: &Path) -> String {
        to_slash(&relative_path(&self.abs_tmp_dir, &self.resolve(component)))
    }
}

/// Render a path with `/` separators
pub fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lexical relative path from directory `from` to `to`
///
/// Both paths are normalized first (`.` dropped, `..` folded). No file-system
/// access is performed, so neither path has to exist.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);

    let common = from
        .components()
        .zip(to.components())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in from.components().skip(common) {
        result.push("..");
    }
    for component in to.components().skip(common) {
        result.push(component);
    }
    result
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
