//! Domain Layer
//!
//! The generation rules of routegen without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Routes, route tables and generated artifacts
//! - `value_objects/` - Immutable value types (ContentHash, ChunkName, RenderMode)
//! - `services/` - Template rendering
//! - `ports/` - Interface definitions for infrastructure and external collaborators
//!
//! Services never touch the file system directly; everything goes through
//! trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
