//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod chunk_name;
mod hash;
mod render_mode;

pub use chunk_name::ChunkName;
pub use hash::ContentHash;
pub use render_mode::RenderMode;
