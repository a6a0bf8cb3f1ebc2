use crate::catalog::{WeaponDefinition, WeaponId, WeaponUpgradeKind};
use crate::core::constants::FIRE_RATE_UPGRADE_FACTOR;
use std::sync::Arc;

/// An equipped weapon. Runtime fields start from the definition and change
/// only through upgrades.
#[derive(Debug, Clone)]
pub struct WeaponInstance {
    definition: Arc<WeaponDefinition>,
    pub damage: u32,
    pub projectile_count: u32,
    /// Seconds between volleys
    pub fire_rate: f64,
    pub bullet_speed: f64,
    pub spread_angle: f64,
}

impl WeaponInstance {
    pub fn new(definition: Arc<WeaponDefinition>) -> Self {
        Self {
            damage: definition.base_damage,
            projectile_count: definition.projectile_count,
            fire_rate: definition.fire_rate,
            bullet_speed: definition.bullet_speed,
            spread_angle: definition.spread_angle,
            definition,
        }
    }

    pub fn definition(&self) -> &Arc<WeaponDefinition> {
        &self.definition
    }

    pub fn id(&self) -> &WeaponId {
        &self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Damage and projectile upgrades add the definition's per-upgrade step.
    /// Fire rate compounds multiplicatively with no floor.
    pub fn apply_upgrade(&mut self, kind: WeaponUpgradeKind) {
        match kind {
            WeaponUpgradeKind::Damage => {
                self.damage = self.damage.saturating_add(self.definition.damage_per_upgrade)
            }
            WeaponUpgradeKind::ProjectileCount => {
                self.projectile_count = self
                    .projectile_count
                    .saturating_add(self.definition.projectile_count_per_upgrade)
            }
            WeaponUpgradeKind::FireRate => self.fire_rate *= FIRE_RATE_UPGRADE_FACTOR,
        }
    }
}
