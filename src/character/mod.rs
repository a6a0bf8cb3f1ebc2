//! Host-side player values: effective stats derived from stat levels, and
//! the XP curve that drives level-ups.

pub mod derived_stats;
pub mod leveling;

pub use derived_stats::PlayerStats;
pub use leveling::{next_threshold, Experience};
