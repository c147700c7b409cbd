//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, GenResult};

use super::types::Config;

/// Project config file name
pub const CONFIG_FILE: &str = "routegen.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config if present, defaults otherwise; env overrides
/// are applied in both cases.
pub fn load_or_default(project_root: &Path) -> GenResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok((with_env_overrides(Config::default()), Vec::new()));
    }
    let (config, warnings) = load_with_warnings(&path)?;
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ROUTEGEN_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // ROUTEGEN_LIBRARY_NAME
    if let Ok(name) = std::env::var("ROUTEGEN_LIBRARY_NAME") {
        if !name.trim().is_empty() {
            config.library_name = name.trim().to_string();
        }
    }

    // ROUTEGEN_DISABLE_SERVICE_WORKER
    if let Ok(val) = std::env::var("ROUTEGEN_DISABLE_SERVICE_WORKER") {
        config.disable_service_worker = is_truthy(&val);
    }

    // ROUTEGEN_LOG
    if let Ok(level) = std::env::var("ROUTEGEN_LOG") {
        if !level.trim().is_empty() {
            config.logging.default = level.trim().to_lowercase();
        }
    }

    config
}

fn is_truthy(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    !(val.is_empty() || val == "false" || val == "0" || val == "no")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "library_name",
        "disable_service_worker",
        "loading",
        "paths",
        "pages",
        "layout",
        "tmp",
        "templates",
        "entry",
        "router",
        "register_service_worker",
        "watch",
        "debounce_ms",
        "logging",
        "default",
        "modules",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
