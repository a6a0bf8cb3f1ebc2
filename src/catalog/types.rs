//! Immutable definition templates for weapons, upgrades, stats and characters.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a weapon definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponId(pub String);

impl WeaponId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of a playable character
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Weapon template. Every equipped instance seeds its runtime fields from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponDefinition {
    pub id: WeaponId,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,

    pub base_damage: u32,
    /// Seconds between volleys (lower = faster)
    pub fire_rate: f64,
    pub projectile_count: u32,
    /// Degrees between adjacent projectiles in a volley
    pub spread_angle: f64,
    pub bullet_speed: f64,

    pub damage_per_upgrade: u32,
    pub projectile_count_per_upgrade: u32,
}

impl Default for WeaponDefinition {
    fn default() -> Self {
        Self {
            id: WeaponId::new(""),
            name: String::new(),
            description: String::new(),
            icon: None,
            base_damage: DEFAULT_WEAPON_DAMAGE,
            fire_rate: DEFAULT_WEAPON_FIRE_RATE,
            projectile_count: DEFAULT_WEAPON_PROJECTILES,
            spread_angle: DEFAULT_WEAPON_SPREAD_ANGLE,
            bullet_speed: DEFAULT_WEAPON_BULLET_SPEED,
            damage_per_upgrade: DEFAULT_DAMAGE_PER_UPGRADE,
            projectile_count_per_upgrade: DEFAULT_PROJECTILES_PER_UPGRADE,
        }
    }
}

impl WeaponDefinition {
    /// Weapon with the given id and name and default combat values
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: WeaponId::new(id),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Which runtime field a weapon upgrade touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponUpgradeKind {
    Damage,
    ProjectileCount,
    FireRate,
}

impl WeaponUpgradeKind {
    pub const ALL: [WeaponUpgradeKind; 3] = [
        WeaponUpgradeKind::Damage,
        WeaponUpgradeKind::ProjectileCount,
        WeaponUpgradeKind::FireRate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponUpgradeKind::Damage => "Damage",
            WeaponUpgradeKind::ProjectileCount => "Projectiles",
            WeaponUpgradeKind::FireRate => "Fire Rate",
        }
    }
}

/// Upgrade template bound to one weapon definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponUpgradeDefinition {
    pub id: String,
    pub target: WeaponId,
    pub kind: WeaponUpgradeKind,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl WeaponUpgradeDefinition {
    pub fn new(id: impl Into<String>, target: WeaponId, kind: WeaponUpgradeKind) -> Self {
        Self {
            id: id.into(),
            target,
            kind,
            display_name: String::new(),
            description: String::new(),
            icon: None,
        }
    }
}

/// Character stat categories. `Custom` kinds scale with `value_per_level`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Speed,
    Damage,
    FireRate,
    ProjectileQuantity,
    Custom(String),
}

impl StatKind {
    pub const CORE: [StatKind; 5] = [
        StatKind::Health,
        StatKind::Speed,
        StatKind::Damage,
        StatKind::FireRate,
        StatKind::ProjectileQuantity,
    ];

    pub fn name(&self) -> &str {
        match self {
            StatKind::Health => "Health",
            StatKind::Speed => "Speed",
            StatKind::Damage => "Damage",
            StatKind::FireRate => "Fire Rate",
            StatKind::ProjectileQuantity => "Projectile Quantity",
            StatKind::Custom(name) => name.as_str(),
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stat template. Exactly one per kind exists in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDefinition {
    pub kind: StatKind,
    #[serde(default)]
    pub unlock_text: String,
    #[serde(default)]
    pub upgrade_text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Linear fallback used by kinds without a dedicated bonus formula
    #[serde(default = "default_value_per_level")]
    pub value_per_level: f64,
}

fn default_value_per_level() -> f64 {
    DEFAULT_STAT_VALUE_PER_LEVEL
}

impl StatDefinition {
    pub fn new(kind: StatKind) -> Self {
        Self {
            unlock_text: format!("Unlock {}", kind.name()),
            upgrade_text: format!("{} Up", kind.name()),
            kind,
            description: String::new(),
            icon: None,
            value_per_level: DEFAULT_STAT_VALUE_PER_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PassiveKind {
    #[default]
    None,
    RegenerateHp,
    DamageBoost,
    SpeedBoost,
    ProjectilePierce,
    ExtraXp,
}

/// Character passive. Carried as data for the host; the engine does not consume it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveEffect {
    pub kind: PassiveKind,
    pub value: f64,
    pub description: String,
}

/// Playable character: a Major Arcana with base stats and a starter weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterDefinition {
    pub id: CharacterId,
    pub name: String,
    pub description: String,
    pub portrait: Option<String>,

    pub arcana_number: u8,
    pub arcana_name: String,

    pub base_speed: f64,
    pub base_max_hp: u32,
    pub starter_weapon: Option<WeaponId>,

    pub passive: PassiveEffect,
}

impl Default for CharacterDefinition {
    fn default() -> Self {
        Self {
            id: CharacterId::new(""),
            name: String::new(),
            description: String::new(),
            portrait: None,
            arcana_number: 0,
            arcana_name: String::new(),
            base_speed: DEFAULT_BASE_SPEED,
            base_max_hp: DEFAULT_BASE_MAX_HP,
            starter_weapon: None,
            passive: PassiveEffect::default(),
        }
    }
}

impl CharacterDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(id),
            name: name.into(),
            ..Default::default()
        }
    }
}
