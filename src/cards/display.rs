//! Card text rendered from current instance values.

use crate::catalog::{StatDefinition, WeaponDefinition, WeaponUpgradeKind};
use crate::progression::{StatInstance, WeaponInstance};

pub fn weapon_unlock_text(weapon: &WeaponDefinition) -> String {
    format!("🔓 {}\n{}", weapon.name.to_uppercase(), weapon.description)
}

pub fn weapon_upgrade_text(weapon: &WeaponInstance, kind: WeaponUpgradeKind) -> String {
    let def = weapon.definition();
    match kind {
        WeaponUpgradeKind::Damage => format!(
            "⚔️ {} DAMAGE\n+{} damage\n(Current: {})",
            def.name, def.damage_per_upgrade, weapon.damage
        ),
        WeaponUpgradeKind::ProjectileCount => format!(
            "🌟 {} PROJECTILES\n+{} projectile\n(Current: {})",
            def.name, def.projectile_count_per_upgrade, weapon.projectile_count
        ),
        WeaponUpgradeKind::FireRate => format!(
            "⚡ {} FIRE RATE\nFaster shooting\n(Current: {:.2}s)",
            def.name, weapon.fire_rate
        ),
    }
}

pub fn stat_unlock_text(stat: &StatDefinition) -> String {
    format!("🌟 {}\n{}", stat.unlock_text, stat.description)
}

pub fn stat_upgrade_text(stat: &StatInstance) -> String {
    format!(
        "⬆️ {}\n(Current: Lv.{})",
        stat.definition().upgrade_text,
        stat.level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StatKind;
    use std::sync::Arc;

    fn wand() -> WeaponInstance {
        WeaponInstance::new(Arc::new(WeaponDefinition {
            description: "Sparks".to_string(),
            ..WeaponDefinition::new("wand", "Wand")
        }))
    }

    #[test]
    fn test_weapon_unlock_uppercases_name() {
        let text = weapon_unlock_text(wand().definition());
        assert_eq!(text, "🔓 WAND\nSparks");
    }

    #[test]
    fn test_weapon_upgrade_shows_current_values() {
        let mut weapon = wand();
        weapon.damage = 3;
        assert_eq!(
            weapon_upgrade_text(&weapon, WeaponUpgradeKind::Damage),
            "⚔️ Wand DAMAGE\n+1 damage\n(Current: 3)"
        );
        assert_eq!(
            weapon_upgrade_text(&weapon, WeaponUpgradeKind::ProjectileCount),
            "🌟 Wand PROJECTILES\n+1 projectile\n(Current: 1)"
        );
        weapon.fire_rate = 0.9;
        assert_eq!(
            weapon_upgrade_text(&weapon, WeaponUpgradeKind::FireRate),
            "⚡ Wand FIRE RATE\nFaster shooting\n(Current: 0.90s)"
        );
    }

    #[test]
    fn test_stat_texts() {
        let def = StatDefinition {
            unlock_text: "VITALITY".to_string(),
            upgrade_text: "Max HP +1".to_string(),
            description: "One more heart.".to_string(),
            ..StatDefinition::new(StatKind::Health)
        };
        assert_eq!(stat_unlock_text(&def), "🌟 VITALITY\nOne more heart.");

        let mut stat = StatInstance::new(Arc::new(def));
        stat.unlock();
        stat.level_up();
        stat.level_up();
        assert_eq!(stat_upgrade_text(&stat), "⬆️ Max HP +1\n(Current: Lv.3)");
    }
}
