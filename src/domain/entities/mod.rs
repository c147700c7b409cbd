//! Domain Entities
//!
//! Core domain objects with identity and lifecycle.

mod artifact;
mod route;

pub use artifact::{GeneratedArtifact, WriteOutcome};
pub use route::{RouteEntry, RouteTable};
