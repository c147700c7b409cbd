//! Domain Services
//!
//! Stateless text assembly over templates and route tables.

pub mod renderer;
pub mod template;

pub use renderer::{RenderOptions, TemplateRenderer};
pub use template::{apply_substitutions, Substitution, SubstitutionScope};
