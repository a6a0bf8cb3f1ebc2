//! Candidate pools: every upgrade currently eligible to be offered.

use super::display::{
    stat_unlock_text, stat_upgrade_text, weapon_unlock_text, weapon_upgrade_text,
};
use super::types::{CardPayload, UpgradeCard};
use crate::progression::ProgressionProvider;
use std::sync::Arc;

/// Weapon and stat candidates, kept separate for the distribution policy.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    pub weapons: Vec<UpgradeCard>,
    pub stats: Vec<UpgradeCard>,
}

impl Candidates {
    pub fn total(&self) -> usize {
        self.weapons.len() + self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.stats.is_empty()
    }
}

/// Build both candidate pools from current state. Read-only.
///
/// - Weapon unlocks: every unequipped definition while below the equip cap.
/// - Weapon upgrades: every upgrade definition targeting an equipped weapon.
///   Upgrades never run out.
/// - Stat unlocks: every locked stat.
/// - Stat upgrades: every unlocked stat.
pub fn build_candidates<P: ProgressionProvider + ?Sized>(provider: &P) -> Candidates {
    let mut candidates = Candidates::default();

    if provider.can_equip_more_weapons() {
        for weapon in provider.all_weapon_definitions() {
            if !provider.has_weapon(&weapon.id) {
                candidates.weapons.push(UpgradeCard::new(
                    CardPayload::WeaponUnlock(Arc::clone(weapon)),
                    weapon_unlock_text(weapon),
                    weapon.icon.clone(),
                ));
            }
        }
    }

    for weapon in provider.equipped_weapons() {
        for upgrade in provider
            .all_weapon_upgrade_definitions()
            .iter()
            .filter(|u| &u.target == weapon.id())
        {
            candidates.weapons.push(UpgradeCard::new(
                CardPayload::WeaponUpgrade(Arc::clone(upgrade)),
                weapon_upgrade_text(weapon, upgrade.kind),
                upgrade
                    .icon
                    .clone()
                    .or_else(|| weapon.definition().icon.clone()),
            ));
        }
    }

    if provider.can_unlock_more_stats() {
        for stat in provider.character_stats().iter().filter(|s| !s.is_unlocked) {
            let def = stat.definition();
            candidates.stats.push(UpgradeCard::new(
                CardPayload::StatUnlock(Arc::clone(def)),
                stat_unlock_text(def),
                def.icon.clone(),
            ));
        }
    }

    for stat in provider.character_stats().iter().filter(|s| s.is_unlocked) {
        let def = stat.definition();
        candidates.stats.push(UpgradeCard::new(
            CardPayload::StatUpgrade(Arc::clone(def)),
            stat_upgrade_text(stat),
            def.icon.clone(),
        ));
    }

    tracing::debug!(
        weapon_candidates = candidates.weapons.len(),
        stat_candidates = candidates.stats.len(),
        "candidate pools built"
    );
    candidates
}
