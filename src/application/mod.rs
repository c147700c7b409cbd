//! Application Layer
//!
//! Orchestrates domain services and ports into the generator use cases.
//!
//! ## Structure
//!
//! - `generator` - `FilesGenerator` (generate, regenerate, rebuild, watch)
//! - `templates` - built-in and configured template resolution
//! - `watch/` - change sources, debouncing and the watch loop
//! - `writer` - change-detecting artifact writes

pub mod generator;
pub mod templates;
pub mod watch;
pub mod writer;

pub use generator::{FilesGenerator, GenerationState, RebuildOutcome};
pub use templates::{load_template, TemplateKind, SERVICE_WORKER_BOOTSTRAP};
pub use watch::{ChangePoll, ChangeSource, ChangeWatcher, Debouncer, WatchSession};
pub use writer::ArtifactWriter;
