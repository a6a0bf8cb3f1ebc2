//! Simulation runner driving real `RunSession`s with random card picks.

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::cards::{build_candidates, stat_guarantee, ApplyOutcome};
use crate::catalog::{Catalog, CharacterId};
use crate::session::{RunSession, SessionConfig, SessionError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Run the full simulation and return a report.
pub fn run_simulation(
    catalog: Arc<Catalog>,
    config: &SimConfig,
) -> Result<SimReport, SessionError> {
    let character = CharacterId::new(config.character.as_str());
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };
        let run_stats = simulate_single_run(Arc::clone(&catalog), &character, config, rng)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Offers {}, Empty {}, Weapons {}, Violations {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_level,
                run_stats.offers,
                run_stats.empty_offers,
                run_stats.final_weapons,
                run_stats.guarantee_violations
            );
        }
        all_runs.push(run_stats);
    }

    Ok(SimReport::from_runs(all_runs, config))
}

/// Play one run: force every level-up and pick a uniformly random card.
fn simulate_single_run(
    catalog: Arc<Catalog>,
    character: &CharacterId,
    config: &SimConfig,
    rng: ChaCha8Rng,
) -> Result<RunStats, SessionError> {
    // Picks come from a separate stream so they do not perturb dealing
    let mut pick_rng = rng.clone();
    pick_rng.set_stream(1);

    let session_config = SessionConfig {
        cards_per_level: config.cards_per_level,
    };
    let mut session = RunSession::new(catalog, character, rng, session_config)?;
    let mut stats = RunStats::default();

    for _ in 0..config.level_ups_per_run {
        let stat_pool = build_candidates(session.run()).stats.len();
        let expected_stats = stat_guarantee(config.cards_per_level, stat_pool);

        let exp = session.experience();
        let needed = exp.xp_to_next_level.saturating_sub(exp.xp);

        let Some(offer) = session.gain_xp(needed) else {
            stats.record_empty_offer();
            continue;
        };
        stats.record_offer(offer, expected_stats);

        let choice = pick_rng.gen_range(0..offer.len());
        match session.choose_card(choice)? {
            ApplyOutcome::Applied => stats.cards_applied += 1,
            ApplyOutcome::Ignored => stats.cards_ignored += 1,
        }
    }

    let state = session.run().state();
    stats.final_level = session.experience().level;
    stats.final_weapons = state.equipped_weapons().len() as u32;
    stats.final_stat_levels = state
        .stats()
        .iter()
        .map(|s| (s.kind().name().to_string(), s.level))
        .collect();
    Ok(stats)
}
