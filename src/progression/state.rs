//! Mutable per-run progression record.

use super::stat::StatInstance;
use super::weapon::WeaponInstance;
use crate::catalog::{
    Catalog, CharacterDefinition, StatKind, WeaponDefinition, WeaponId, WeaponUpgradeKind,
};
use crate::core::constants::MAX_EQUIPPED_WEAPONS;
use std::sync::Arc;

/// Selected character, equipped weapons (acquisition order) and one stat
/// instance per catalog stat kind.
#[derive(Debug, Clone)]
pub struct ProgressionState {
    character: Option<Arc<CharacterDefinition>>,
    weapons: Vec<WeaponInstance>,
    stats: Vec<StatInstance>,
}

impl ProgressionState {
    /// Fresh state with every catalog stat locked and nothing equipped.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            character: None,
            weapons: Vec::with_capacity(MAX_EQUIPPED_WEAPONS),
            stats: catalog
                .stats()
                .iter()
                .map(|def| StatInstance::new(Arc::clone(def)))
                .collect(),
        }
    }

    /// Fresh state for `character`, with its starter weapon equipped.
    pub fn start_run(catalog: &Catalog, character: Arc<CharacterDefinition>) -> Self {
        let mut state = Self::new(catalog);
        state.select_character(catalog, character);
        state
    }

    /// Select a character and re-equip its starter weapon. Stats are untouched.
    pub fn select_character(&mut self, catalog: &Catalog, character: Arc<CharacterDefinition>) {
        self.weapons.clear();
        if let Some(starter) = character
            .starter_weapon
            .as_ref()
            .and_then(|id| catalog.weapon(id))
        {
            self.weapons.push(WeaponInstance::new(Arc::clone(starter)));
        }
        tracing::info!(character = %character.id, "character selected");
        self.character = Some(character);
    }

    /// Back to run-start: starter weapon only, all stats locked.
    pub fn reset(&mut self, catalog: &Catalog) {
        for stat in &mut self.stats {
            stat.reset();
        }
        match self.character.clone() {
            Some(character) => self.select_character(catalog, character),
            None => self.weapons.clear(),
        }
    }

    pub fn character(&self) -> Option<&Arc<CharacterDefinition>> {
        self.character.as_ref()
    }

    // ---------------- Weapons ----------------

    pub fn equipped_weapons(&self) -> &[WeaponInstance] {
        &self.weapons
    }

    pub fn weapon(&self, id: &WeaponId) -> Option<&WeaponInstance> {
        self.weapons.iter().find(|w| w.id() == id)
    }

    pub fn has_weapon(&self, id: &WeaponId) -> bool {
        self.weapon(id).is_some()
    }

    pub fn can_equip_more_weapons(&self) -> bool {
        self.weapons.len() < MAX_EQUIPPED_WEAPONS
    }

    /// Equip a new instance. No-op if already equipped or at the cap.
    pub fn unlock_weapon(&mut self, definition: &Arc<WeaponDefinition>) -> bool {
        if self.has_weapon(&definition.id) || !self.can_equip_more_weapons() {
            return false;
        }
        self.weapons.push(WeaponInstance::new(Arc::clone(definition)));
        tracing::info!(weapon = %definition.id, "weapon unlocked");
        true
    }

    /// Upgrade an equipped weapon. No-op if it is not equipped.
    pub fn upgrade_weapon(&mut self, id: &WeaponId, kind: WeaponUpgradeKind) -> bool {
        let Some(weapon) = self.weapons.iter_mut().find(|w| w.id() == id) else {
            return false;
        };
        weapon.apply_upgrade(kind);
        tracing::info!(weapon = %id, upgrade = ?kind, "weapon upgraded");
        true
    }

    // ---------------- Stats ----------------

    pub fn stats(&self) -> &[StatInstance] {
        &self.stats
    }

    pub fn stat(&self, kind: &StatKind) -> Option<&StatInstance> {
        self.stats.iter().find(|s| s.kind() == kind)
    }

    pub fn can_unlock_more_stats(&self) -> bool {
        self.stats.iter().any(|s| !s.is_unlocked)
    }

    /// Current bonus for `kind`, or 0 when the kind is not tracked.
    pub fn stat_bonus(&self, kind: &StatKind) -> f64 {
        self.stat(kind).map(StatInstance::bonus).unwrap_or(0.0)
    }

    /// Unlock a stat at level 1. No-op if unknown or already unlocked.
    pub fn unlock_stat(&mut self, kind: &StatKind) -> bool {
        let Some(stat) = self.stats.iter_mut().find(|s| s.kind() == kind) else {
            return false;
        };
        let changed = stat.unlock();
        if changed {
            tracing::info!(stat = %kind, "stat unlocked");
        }
        changed
    }

    /// Level a stat up; a locked stat is unlocked at level 1 instead.
    /// No-op if the kind is unknown.
    pub fn upgrade_stat(&mut self, kind: &StatKind) -> bool {
        let Some(stat) = self.stats.iter_mut().find(|s| s.kind() == kind) else {
            return false;
        };
        stat.level_up();
        tracing::info!(stat = %kind, level = stat.level, "stat upgraded");
        true
    }
}
