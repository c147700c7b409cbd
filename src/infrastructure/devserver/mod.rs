//! Dev-server collaborators
//!
//! Notifier implementations for the generator's two push messages, and the
//! shared cache of requested urls consulted by on-demand rendering.

mod notifiers;
mod request_cache;

pub use notifiers::{ChannelNotifier, NoopNotifier, RecordingNotifier, StdoutNotifier};
pub use request_cache::SharedRequestCache;
