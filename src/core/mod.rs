//! Shared tunables for the progression engine.

pub mod constants;

pub use constants::*;
