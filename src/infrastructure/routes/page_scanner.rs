//! Convention-based route source
//!
//! Every page file under the pages directory becomes a route:
//! `index.js` maps to its directory, `users/list.js` to `/users/list`.
//! Hidden files and directories are skipped.

use std::path::{Component, Path};

use ignore::WalkBuilder;
use tracing::debug;

use crate::config::Config;
use crate::domain::entities::RouteEntry;
use crate::domain::ports::RouteSource;
use crate::error::{GenError, GenResult};
use crate::paths::{relative_path, to_slash, GeneratorPaths};

/// File extensions recognized as pages
pub const PAGE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Walks the pages directory in file-name order
#[derive(Debug, Clone, Copy, Default)]
pub struct PageScanner;

impl PageScanner {
    pub fn new() -> Self {
        Self
    }
}

impl RouteSource for PageScanner {
    fn routes(&self, paths: &GeneratorPaths, _config: &Config) -> GenResult<Vec<RouteEntry>> {
        if !paths.pages.is_dir() {
            return Err(GenError::DirectoryNotFound {
                path: paths.pages.clone(),
            });
        }

        let walker = WalkBuilder::new(&paths.pages)
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.map_err(|e| GenError::Io(std::io::Error::other(e.to_string())))?;
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            let file = entry.path();
            if !is_page(file) {
                continue;
            }
            let Ok(rel) = file.strip_prefix(&paths.pages) else {
                continue;
            };

            let route = RouteEntry::new(url_path_for(rel)?, component_path(paths, file));
            debug!(path = %route.path, component = %route.component.display(), "route");
            entries.push(route);
        }

        Ok(entries)
    }
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| PAGE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Component reference as the generator expects it: `./`-relative to the
/// project root when possible
fn component_path(paths: &GeneratorPaths, file: &Path) -> std::path::PathBuf {
    if file.starts_with(&paths.cwd) {
        let rel = relative_path(&paths.cwd, file);
        std::path::PathBuf::from(format!("./{}", to_slash(&rel)))
    } else {
        file.to_path_buf()
    }
}

/// Url path for a page file given relative to the pages directory
pub fn url_path_for(rel: &Path) -> GenResult<String> {
    let mut segments: Vec<String> = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            _ => {
                return Err(GenError::InvalidRoute {
                    component: rel.to_path_buf(),
                    message: "page path must stay inside the pages directory".to_string(),
                })
            }
        }
    }

    let Some(file) = segments.pop() else {
        return Err(GenError::InvalidRoute {
            component: rel.to_path_buf(),
            message: "empty page path".to_string(),
        });
    };
    let stem = Path::new(&file)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or(file);
    if stem != "index" {
        segments.push(stem);
    }

    Ok(format!("/{}", segments.join("/")))
}
