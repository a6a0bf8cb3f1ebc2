//! Hand selection with a guaranteed share of stat cards.
//!
//! One slot is reserved for a stat card in hands of up to three cards, two
//! slots in hands of four or more. Leftover slots are backfilled.

use super::candidates::Candidates;
use super::types::UpgradeCard;
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of slots reserved for stat cards in a hand of `count`.
pub fn stat_guarantee(count: usize, stat_candidates: usize) -> usize {
    if stat_candidates == 0 {
        return 0;
    }
    let guarantee = if count >= LARGE_HAND_THRESHOLD {
        LARGE_HAND_STAT_GUARANTEE
    } else {
        SMALL_HAND_STAT_GUARANTEE
    };
    guarantee.min(stat_candidates)
}

/// Pick at most `count` cards from the candidate pools.
///
/// Both pools are shuffled, the weapon quota and stat guarantee are taken
/// from the front, leftover slots are filled from the remaining stat cards
/// and then the remaining weapon cards, and the final hand is shuffled again
/// so the guaranteed stat cards do not sit in a fixed position.
pub fn distribute_cards<R: Rng + ?Sized>(
    candidates: Candidates,
    count: usize,
    rng: &mut R,
) -> Vec<UpgradeCard> {
    if count == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let Candidates {
        mut weapons,
        mut stats,
    } = candidates;

    let guarantee = stat_guarantee(count, stats.len());
    let weapon_quota = count.saturating_sub(guarantee);

    weapons.shuffle(rng);
    stats.shuffle(rng);

    let weapons_taken = weapon_quota.min(weapons.len());
    let mut remaining_weapons = weapons.split_off(weapons_taken);
    let mut remaining_stats = stats.split_off(guarantee);

    let mut hand = Vec::with_capacity(count);
    hand.append(&mut weapons);
    hand.append(&mut stats);

    let missing = count.saturating_sub(hand.len());
    if missing > 0 {
        let backfill_stats = missing.min(remaining_stats.len());
        hand.extend(remaining_stats.drain(..backfill_stats));

        let missing = count.saturating_sub(hand.len());
        let backfill_weapons = missing.min(remaining_weapons.len());
        hand.extend(remaining_weapons.drain(..backfill_weapons));
    }

    hand.shuffle(rng);

    tracing::debug!(
        requested = count,
        guarantee,
        weapon_quota,
        dealt = hand.len(),
        "cards distributed"
    );
    hand
}
