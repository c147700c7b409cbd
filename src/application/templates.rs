//! Template resolution
//!
//! Each generated module has a built-in template; configuration may point
//! at a replacement file. A configured file that does not exist is fatal.

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::error::{GenError, GenResult};
use crate::paths::GeneratorPaths;

const BUILTIN_ENTRY: &str = include_str!("../../templates/entry.js");
const BUILTIN_ROUTER: &str = include_str!("../../templates/router.js");
const BUILTIN_REGISTER_SW: &str = include_str!("../../templates/registerServiceWorker.js");

/// Appended to the entry module unless service workers are disabled
pub const SERVICE_WORKER_BOOTSTRAP: &str = "
// Enable service worker
if (process.env.NODE_ENV === 'production') {
  require('./registerServiceWorker');
}
";

/// Which generated module a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Entry,
    Router,
    RegisterServiceWorker,
}

impl TemplateKind {
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Entry => "entry",
            TemplateKind::Router => "router",
            TemplateKind::RegisterServiceWorker => "register service worker",
        }
    }

    pub fn builtin(&self) -> &'static str {
        match self {
            TemplateKind::Entry => BUILTIN_ENTRY,
            TemplateKind::Router => BUILTIN_ROUTER,
            TemplateKind::RegisterServiceWorker => BUILTIN_REGISTER_SW,
        }
    }

    fn configured<'a>(&self, config: &'a Config) -> Option<&'a Path> {
        match self {
            TemplateKind::Entry => config.templates.entry.as_deref(),
            TemplateKind::Router => config.templates.router.as_deref(),
            TemplateKind::RegisterServiceWorker => {
                config.templates.register_service_worker.as_deref()
            }
        }
    }
}

/// Template text for `kind`
pub fn load_template<FS: FileSystem>(
    fs: &FS,
    paths: &GeneratorPaths,
    config: &Config,
    kind: TemplateKind,
) -> GenResult<String> {
    let Some(configured) = kind.configured(config) else {
        return Ok(kind.builtin().to_string());
    };

    let path = paths.resolve(configured);
    if !fs.exists(&path) {
        return Err(GenError::TemplateNotFound {
            kind: kind.name(),
            path,
        });
    }
    Ok(fs.read(&path)?)
}
