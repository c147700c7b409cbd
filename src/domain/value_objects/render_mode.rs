//! RenderMode value object - how route registrations are emitted
//!
//! - `OnDemand`: development with lazy per-page compilation
//! - `Production`: every page is a lazily imported chunk

use serde::{Deserialize, Serialize};

/// Environment variable selecting the runtime mode
pub const NODE_ENV_VAR: &str = "NODE_ENV";
/// Environment variable that disables on-demand compilation when set to `none`
pub const COMPILE_ON_DEMAND_VAR: &str = "COMPILE_ON_DEMAND";

/// Route rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Requested pages reference their module, the rest render a placeholder
    OnDemand,
    /// Pages are split into lazily loaded chunks
    #[default]
    Production,
}

impl RenderMode {
    /// Resolve the mode from raw environment values
    pub fn from_env_values(node_env: Option<&str>, compile_on_demand: Option<&str>) -> Self {
        let is_dev = node_env == Some("development");
        if is_dev && compile_on_demand != Some("none") {
            RenderMode::OnDemand
        } else {
            RenderMode::Production
        }
    }

    /// Resolve the mode from the process environment
    pub fn from_env() -> Self {
        let node_env = std::env::var(NODE_ENV_VAR).ok();
        let on_demand = std::env::var(COMPILE_ON_DEMAND_VAR).ok();
        Self::from_env_values(node_env.as_deref(), on_demand.as_deref())
    }

    pub fn is_on_demand(&self) -> bool {
        matches!(self, RenderMode::OnDemand)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::OnDemand => write!(f, "on-demand"),
            RenderMode::Production => write!(f, "production"),
        }
    }
}
