//! Definition catalog: immutable templates for weapons, weapon upgrades,
//! stats and characters.
//!
//! A catalog is loaded once per run, validated, and treated as read-only
//! afterwards. Runtime instances and upgrade cards share definitions by `Arc`.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod registry;
pub mod types;

pub use builtin::*;
pub use error::CatalogError;
pub use loader::*;
pub use registry::*;
pub use types::*;
