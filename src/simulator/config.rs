//! Simulation configuration.

use crate::core::constants::DEFAULT_CARDS_PER_LEVEL;
use std::path::PathBuf;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Level-ups forced in every run
    pub level_ups_per_run: u32,

    /// Cards dealt per level-up
    pub cards_per_level: usize,

    /// Character every run starts as
    pub character: String,

    /// Catalog file (None = ~/.arcana/catalog.json or the built-in set)
    pub catalog_path: Option<PathBuf>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            level_ups_per_run: 30,
            cards_per_level: DEFAULT_CARDS_PER_LEVEL,
            character: "fool".to_string(),
            catalog_path: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for a quick distribution check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            level_ups_per_run: 15,
            ..Default::default()
        }
    }

    /// Batch exercising the two-stat guarantee of large hands
    pub fn large_hand(cards_per_level: usize) -> Self {
        Self {
            num_runs: 200,
            cards_per_level,
            ..Default::default()
        }
    }

    /// Long runs that exhaust weapon unlocks and every stat
    pub fn saturation() -> Self {
        Self {
            num_runs: 50,
            level_ups_per_run: 100,
            ..Default::default()
        }
    }
}
