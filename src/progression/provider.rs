//! The state/definition provider consumed by the card engine.

use super::stat::StatInstance;
use super::state::ProgressionState;
use super::weapon::WeaponInstance;
use crate::catalog::{
    Catalog, CharacterDefinition, CharacterId, StatKind, WeaponDefinition, WeaponId,
    WeaponUpgradeDefinition, WeaponUpgradeKind,
};
use std::sync::Arc;

/// Read access to progression state and definitions, plus the four mutators
/// the card applier is allowed to call.
///
/// Mutators return `true` when state changed and must be no-ops (returning
/// `false`) on stale or invalid targets.
pub trait ProgressionProvider {
    fn equipped_weapons(&self) -> &[WeaponInstance];
    fn can_equip_more_weapons(&self) -> bool;
    fn has_weapon(&self, weapon: &WeaponId) -> bool;
    fn all_weapon_definitions(&self) -> &[Arc<WeaponDefinition>];
    fn all_weapon_upgrade_definitions(&self) -> &[Arc<WeaponUpgradeDefinition>];
    fn character_stats(&self) -> &[StatInstance];
    fn can_unlock_more_stats(&self) -> bool;

    fn unlock_weapon(&mut self, weapon: &Arc<WeaponDefinition>) -> bool;
    fn upgrade_weapon(&mut self, weapon: &WeaponId, kind: WeaponUpgradeKind) -> bool;
    fn unlock_stat(&mut self, stat: &StatKind) -> bool;
    fn upgrade_stat(&mut self, stat: &StatKind) -> bool;
}

/// A catalog paired with the progression state of one run.
#[derive(Debug, Clone)]
pub struct Run {
    catalog: Arc<Catalog>,
    state: ProgressionState,
}

impl Run {
    /// Run with no character selected: all stats locked, nothing equipped.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = ProgressionState::new(&catalog);
        Self { catalog, state }
    }

    /// Run for a catalog character. `None` if the id is unknown.
    pub fn for_character(catalog: Arc<Catalog>, character: &CharacterId) -> Option<Self> {
        let definition = Arc::clone(catalog.character(character)?);
        let state = ProgressionState::start_run(&catalog, definition);
        Some(Self { catalog, state })
    }

    pub fn with_state(catalog: Arc<Catalog>, state: ProgressionState) -> Self {
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn character(&self) -> Option<&Arc<CharacterDefinition>> {
        self.state.character()
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.catalog);
    }
}

impl ProgressionProvider for Run {
    fn equipped_weapons(&self) -> &[WeaponInstance] {
        self.state.equipped_weapons()
    }

    fn can_equip_more_weapons(&self) -> bool {
        self.state.can_equip_more_weapons()
    }

    fn has_weapon(&self, weapon: &WeaponId) -> bool {
        self.state.has_weapon(weapon)
    }

    fn all_weapon_definitions(&self) -> &[Arc<WeaponDefinition>] {
        self.catalog.weapons()
    }

    fn all_weapon_upgrade_definitions(&self) -> &[Arc<WeaponUpgradeDefinition>] {
        self.catalog.weapon_upgrades()
    }

    fn character_stats(&self) -> &[StatInstance] {
        self.state.stats()
    }

    fn can_unlock_more_stats(&self) -> bool {
        self.state.can_unlock_more_stats()
    }

    fn unlock_weapon(&mut self, weapon: &Arc<WeaponDefinition>) -> bool {
        self.state.unlock_weapon(weapon)
    }

    fn upgrade_weapon(&mut self, weapon: &WeaponId, kind: WeaponUpgradeKind) -> bool {
        self.state.upgrade_weapon(weapon, kind)
    }

    fn unlock_stat(&mut self, stat: &StatKind) -> bool {
        self.state.unlock_stat(stat)
    }

    fn upgrade_stat(&mut self, stat: &StatKind) -> bool {
        self.state.upgrade_stat(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn test_for_character_unknown_id() {
        let catalog = Arc::new(builtin_catalog().unwrap());
        assert!(Run::for_character(catalog, &CharacterId::new("hermit")).is_none());
    }

    #[test]
    fn test_provider_delegates_to_state_and_catalog() {
        let catalog = Arc::new(builtin_catalog().unwrap());
        let mut run =
            Run::for_character(Arc::clone(&catalog), &CharacterId::new("chariot")).unwrap();

        assert_eq!(run.all_weapon_definitions().len(), catalog.weapons().len());
        assert_eq!(
            run.all_weapon_upgrade_definitions().len(),
            catalog.weapon_upgrades().len()
        );
        assert!(run.has_weapon(&WeaponId::new("sword")));
        assert!(run.can_equip_more_weapons());

        let cup = Arc::clone(catalog.weapon(&WeaponId::new("cup")).unwrap());
        assert!(run.unlock_weapon(&cup));
        assert_eq!(run.equipped_weapons().len(), 2);

        assert!(run.unlock_stat(&StatKind::Damage));
        assert!(run.upgrade_stat(&StatKind::Damage));
        assert_eq!(run.state().stat(&StatKind::Damage).unwrap().level, 2);
    }

    #[test]
    fn test_reset() {
        let catalog = Arc::new(builtin_catalog().unwrap());
        let mut run = Run::for_character(catalog, &CharacterId::new("fool")).unwrap();
        run.unlock_stat(&StatKind::Health);
        run.reset();
        assert!(run.can_unlock_more_stats());
        assert!(run.character_stats().iter().all(|s| !s.is_unlocked));
    }
}
