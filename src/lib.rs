//! Routegen - route module generator for front-end dev servers
//!
//! Routegen turns a project's page tree into a router module, writes the
//! entry and service-worker modules around it, and regenerates the router
//! whenever pages or the layout change.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod paths;

pub use application::{FilesGenerator, GenerationState, RebuildOutcome};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{RouteEntry, RouteTable, WriteOutcome};
pub use domain::ports::{DevServerMessage, DevServerNotifier, GeneratorPlugin, RouteSource};
pub use domain::value_objects::{ChunkName, RenderMode};
pub use error::{GenError, GenResult};
pub use paths::GeneratorPaths;
