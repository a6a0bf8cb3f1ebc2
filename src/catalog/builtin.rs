//! Built-in content: the four suits as weapons and three Major Arcana.

use super::error::Result;
use super::registry::{Catalog, CatalogData};
use super::types::*;

fn weapon_upgrades(weapon: &str, name: &str) -> Vec<WeaponUpgradeDefinition> {
    WeaponUpgradeKind::ALL
        .iter()
        .map(|&kind| {
            let suffix = match kind {
                WeaponUpgradeKind::Damage => "damage",
                WeaponUpgradeKind::ProjectileCount => "projectiles",
                WeaponUpgradeKind::FireRate => "fire_rate",
            };
            WeaponUpgradeDefinition {
                display_name: format!("{} {}", name, kind.name()),
                ..WeaponUpgradeDefinition::new(
                    format!("{}_{}", weapon, suffix),
                    WeaponId::new(weapon),
                    kind,
                )
            }
        })
        .collect()
}

/// Raw built-in catalog, also usable as a template for custom catalog files
pub fn builtin_catalog_data() -> CatalogData {
    let weapons = vec![
        WeaponDefinition {
            description: "A steady bolt of flame toward the nearest foe.".to_string(),
            icon: Some("icons/wand.png".to_string()),
            ..WeaponDefinition::new("wand", "Wand")
        },
        WeaponDefinition {
            description: "Three short blades in a tight fan.".to_string(),
            icon: Some("icons/sword.png".to_string()),
            base_damage: 2,
            fire_rate: 1.4,
            projectile_count: 3,
            spread_angle: 15.0,
            bullet_speed: 10.0,
            ..WeaponDefinition::new("sword", "Sword")
        },
        WeaponDefinition {
            description: "Slow, heavy droplets that hit hard.".to_string(),
            icon: Some("icons/cup.png".to_string()),
            base_damage: 3,
            fire_rate: 1.8,
            bullet_speed: 5.0,
            damage_per_upgrade: 2,
            ..WeaponDefinition::new("cup", "Cup")
        },
        WeaponDefinition {
            description: "Rapid coins scattered in a wide arc.".to_string(),
            icon: Some("icons/pentacle.png".to_string()),
            fire_rate: 0.6,
            projectile_count: 2,
            spread_angle: 25.0,
            bullet_speed: 7.0,
            ..WeaponDefinition::new("pentacle", "Pentacle")
        },
    ];

    let mut upgrades = Vec::new();
    for weapon in &weapons {
        upgrades.extend(weapon_upgrades(weapon.id.as_str(), &weapon.name));
    }

    let stats = vec![
        StatDefinition {
            unlock_text: "VITALITY".to_string(),
            upgrade_text: "Max HP +1".to_string(),
            description: "Gain one extra heart.".to_string(),
            icon: Some("icons/heart.png".to_string()),
            ..StatDefinition::new(StatKind::Health)
        },
        StatDefinition {
            unlock_text: "SWIFTNESS".to_string(),
            upgrade_text: "Move Speed +50%".to_string(),
            description: "Move faster across the field.".to_string(),
            icon: Some("icons/boots.png".to_string()),
            ..StatDefinition::new(StatKind::Speed)
        },
        StatDefinition {
            unlock_text: "STRENGTH".to_string(),
            upgrade_text: "Damage +50%".to_string(),
            description: "Every projectile hits harder.".to_string(),
            icon: Some("icons/fist.png".to_string()),
            ..StatDefinition::new(StatKind::Damage)
        },
        StatDefinition {
            unlock_text: "HASTE".to_string(),
            upgrade_text: "Fire Rate +33%".to_string(),
            description: "All weapons fire more often.".to_string(),
            icon: Some("icons/hourglass.png".to_string()),
            ..StatDefinition::new(StatKind::FireRate)
        },
        StatDefinition {
            unlock_text: "MULTIPLICITY".to_string(),
            upgrade_text: "Projectiles +1".to_string(),
            description: "Every volley fires one more projectile.".to_string(),
            icon: Some("icons/stars.png".to_string()),
            ..StatDefinition::new(StatKind::ProjectileQuantity)
        },
    ];

    let characters = vec![
        CharacterDefinition {
            description: "Begins the journey with nothing but a wand.".to_string(),
            arcana_number: 0,
            arcana_name: "The Fool".to_string(),
            starter_weapon: Some(WeaponId::new("wand")),
            passive: PassiveEffect {
                kind: PassiveKind::ExtraXp,
                value: 0.1,
                description: "Gain 10% more XP.".to_string(),
            },
            ..CharacterDefinition::new("fool", "The Fool")
        },
        CharacterDefinition {
            description: "Master of coin and craft.".to_string(),
            arcana_number: 1,
            arcana_name: "The Magician".to_string(),
            starter_weapon: Some(WeaponId::new("pentacle")),
            passive: PassiveEffect {
                kind: PassiveKind::DamageBoost,
                value: 0.15,
                description: "Deal 15% more damage.".to_string(),
            },
            ..CharacterDefinition::new("magician", "The Magician")
        },
        CharacterDefinition {
            description: "Charges ahead, blades drawn.".to_string(),
            arcana_number: 7,
            arcana_name: "The Chariot".to_string(),
            base_speed: 7.5,
            base_max_hp: 4,
            starter_weapon: Some(WeaponId::new("sword")),
            passive: PassiveEffect {
                kind: PassiveKind::SpeedBoost,
                value: 0.1,
                description: "Move 10% faster.".to_string(),
            },
            ..CharacterDefinition::new("chariot", "The Chariot")
        },
    ];

    CatalogData {
        weapons,
        weapon_upgrades: upgrades,
        stats,
        characters,
    }
}

pub fn builtin_catalog() -> Result<Catalog> {
    Catalog::new(builtin_catalog_data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.weapons().len(), 4);
        assert_eq!(catalog.weapon_upgrades().len(), 12);
        assert_eq!(catalog.stats().len(), StatKind::CORE.len());
        assert_eq!(catalog.characters().len(), 3);
    }

    #[test]
    fn test_every_weapon_has_all_upgrade_kinds() {
        let catalog = builtin_catalog().unwrap();
        for weapon in catalog.weapons() {
            let kinds: Vec<_> = catalog.upgrades_for(&weapon.id).map(|u| u.kind).collect();
            assert_eq!(kinds, WeaponUpgradeKind::ALL.to_vec(), "{}", weapon.id);
        }
    }

    #[test]
    fn test_every_character_has_starter_weapon() {
        let catalog = builtin_catalog().unwrap();
        for character in catalog.characters() {
            let starter = character.starter_weapon.as_ref().unwrap();
            assert!(catalog.weapon(starter).is_some());
        }
    }
}
