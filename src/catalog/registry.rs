//! Validated, read-only definition catalog.

use super::error::{CatalogError, Result};
use super::types::*;
use crate::core::constants::MAX_ARCANA_NUMBER;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Raw catalog contents as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub weapons: Vec<WeaponDefinition>,
    pub weapon_upgrades: Vec<WeaponUpgradeDefinition>,
    pub stats: Vec<StatDefinition>,
    pub characters: Vec<CharacterDefinition>,
}

/// All definitions for a run, loaded once and shared by reference.
///
/// Definitions are wrapped in `Arc` so instances and cards can hold onto
/// their template without copying it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    weapons: Vec<Arc<WeaponDefinition>>,
    weapon_upgrades: Vec<Arc<WeaponUpgradeDefinition>>,
    stats: Vec<Arc<StatDefinition>>,
    characters: Vec<Arc<CharacterDefinition>>,
}

impl Catalog {
    /// Validate raw data and freeze it into a catalog.
    pub fn new(data: CatalogData) -> Result<Self> {
        let mut weapon_ids = HashSet::new();
        for weapon in &data.weapons {
            if !weapon_ids.insert(weapon.id.clone()) {
                return Err(CatalogError::DuplicateWeapon(weapon.id.clone()));
            }
        }

        for upgrade in &data.weapon_upgrades {
            if !weapon_ids.contains(&upgrade.target) {
                return Err(CatalogError::UnknownUpgradeTarget {
                    upgrade: upgrade.id.clone(),
                    target: upgrade.target.clone(),
                });
            }
        }

        let mut stat_kinds = HashSet::new();
        for stat in &data.stats {
            if !stat_kinds.insert(stat.kind.clone()) {
                return Err(CatalogError::DuplicateStat(stat.kind.clone()));
            }
        }

        let mut character_ids = HashSet::new();
        for character in &data.characters {
            if !character_ids.insert(character.id.clone()) {
                return Err(CatalogError::DuplicateCharacter(character.id.clone()));
            }
            if character.arcana_number > MAX_ARCANA_NUMBER {
                return Err(CatalogError::InvalidArcanaNumber {
                    character: character.id.clone(),
                    number: character.arcana_number,
                });
            }
            if let Some(starter) = &character.starter_weapon {
                if !weapon_ids.contains(starter) {
                    return Err(CatalogError::UnknownStarterWeapon {
                        character: character.id.clone(),
                        weapon: starter.clone(),
                    });
                }
            }
        }

        Ok(Self {
            weapons: data.weapons.into_iter().map(Arc::new).collect(),
            weapon_upgrades: data.weapon_upgrades.into_iter().map(Arc::new).collect(),
            stats: data.stats.into_iter().map(Arc::new).collect(),
            characters: data.characters.into_iter().map(Arc::new).collect(),
        })
    }

    /// Catalog with no definitions at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn weapons(&self) -> &[Arc<WeaponDefinition>] {
        &self.weapons
    }

    pub fn weapon(&self, id: &WeaponId) -> Option<&Arc<WeaponDefinition>> {
        self.weapons.iter().find(|w| &w.id == id)
    }

    pub fn weapon_upgrades(&self) -> &[Arc<WeaponUpgradeDefinition>] {
        &self.weapon_upgrades
    }

    /// Upgrade definitions targeting the given weapon, in catalog order
    pub fn upgrades_for<'a>(
        &'a self,
        weapon: &'a WeaponId,
    ) -> impl Iterator<Item = &'a Arc<WeaponUpgradeDefinition>> + 'a {
        self.weapon_upgrades
            .iter()
            .filter(move |u| &u.target == weapon)
    }

    pub fn stats(&self) -> &[Arc<StatDefinition>] {
        &self.stats
    }

    pub fn stat(&self, kind: &StatKind) -> Option<&Arc<StatDefinition>> {
        self.stats.iter().find(|s| &s.kind == kind)
    }

    pub fn characters(&self) -> &[Arc<CharacterDefinition>] {
        &self.characters
    }

    pub fn character(&self, id: &CharacterId) -> Option<&Arc<CharacterDefinition>> {
        self.characters.iter().find(|c| &c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty() && self.stats.is_empty()
    }
}
