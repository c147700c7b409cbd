//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `routes/` - Route sources (page directory scanner)
//! - `devserver/` - Notifiers and the shared request cache

pub mod devserver;
pub mod fs;
pub mod routes;

pub use devserver::{
    ChannelNotifier, NoopNotifier, RecordingNotifier, SharedRequestCache, StdoutNotifier,
};
pub use fs::{LocalFs, MemoryFs};
pub use routes::PageScanner;
