//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete implementations; tests use mocks.

pub mod devserver;
pub mod file_system;
pub mod plugin;
pub mod route_source;

pub use devserver::{DevServerMessage, DevServerNotifier, RequestCache};
pub use file_system::{FileSystem, FsError, FsResult};
pub use plugin::GeneratorPlugin;
pub use route_source::RouteSource;
