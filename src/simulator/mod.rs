//! Monte Carlo simulator for the upgrade-card economy.
//!
//! Runs thousands of seeded sessions that level up repeatedly and pick a
//! random card each time, to check:
//! - the stat-card guarantee holds for every offer
//! - how often offers come up empty or short
//! - how weapons and stats are spread at the end of a run

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
pub use stats::RunStats;
