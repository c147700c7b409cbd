//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenResult;

use super::loader::{self, ConfigWarning};

/// Project layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Pages directory, relative to the project root
    #[serde(default = "default_pages")]
    pub pages: PathBuf,

    /// Layout file wrapping every route when it exists
    #[serde(default = "default_layout")]
    pub layout: PathBuf,

    /// Temporary output directory for generated modules
    #[serde(default = "default_tmp")]
    pub tmp: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            layout: default_layout(),
            tmp: default_tmp(),
        }
    }
}

fn default_pages() -> PathBuf {
    PathBuf::from("src/pages")
}

fn default_layout() -> PathBuf {
    PathBuf::from("src/layouts/index.js")
}

fn default_tmp() -> PathBuf {
    PathBuf::from("src/.routegen")
}

/// Template overrides; unset entries use the built-in templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub entry: Option<PathBuf>,

    #[serde(default)]
    pub router: Option<PathBuf>,

    #[serde(default)]
    pub register_service_worker: Option<PathBuf>,
}

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quiet period before a burst of changes triggers a rebuild
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    100
}

/// Logging configuration
///
/// ```toml
/// [logging]
/// default = "info"
///
/// [logging.modules]
/// "routegen::application::watch" = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub default: String,

    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Replaces every `<%= libraryName %>` and names the entry module
    #[serde(default = "default_library_name")]
    pub library_name: String,

    /// Skip the service-worker bootstrap block in the entry module
    #[serde(default)]
    pub disable_service_worker: bool,

    /// Component rendered while a lazily loaded route is fetched
    #[serde(default)]
    pub loading: Option<PathBuf>,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_library_name() -> String {
    "umi".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_name: default_library_name(),
            disable_service_worker: false,
            loading: None,
            paths: PathsConfig::default(),
            templates: TemplatesConfig::default(),
            watch: WatchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `routegen.toml` from the project root, or defaults when absent
    pub fn load_or_default(project_root: &Path) -> GenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ROUTEGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
