//! Dev-server ports
//!
//! The generator only ever pushes two kinds of messages to connected
//! browsers, and only ever asks one question of the dev server: has this url
//! been requested yet?

use serde::{Deserialize, Serialize};

/// Message pushed to connected clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum DevServerMessage {
    /// Clients should reload
    ContentChanged,
    /// Clients should show an error overlay
    Errors(Vec<String>),
}

impl DevServerMessage {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Notification channel to the dev server's browser clients
pub trait DevServerNotifier {
    /// Tell clients to refresh
    fn content_changed(&self);

    /// Tell clients a rebuild failed; `messages` is never empty
    fn errors(&self, messages: &[String]);
}

/// Urls the dev server has already served at least once
pub trait RequestCache {
    fn is_requested(&self, path: &str) -> bool;
}
