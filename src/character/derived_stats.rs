use crate::catalog::{CharacterDefinition, StatKind};
use crate::core::constants::*;
use crate::progression::{bonus, StatInstance, WeaponInstance};

/// Effective player values derived from the character template and the
/// current stat levels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub max_hp: u32,
    pub hp: u32,
    pub speed: f64,
    pub damage_multiplier: f64,
    /// Fraction shaved off every weapon's fire interval
    pub fire_rate_reduction: f64,
    pub bonus_projectiles: u32,
    pub base_max_hp: u32,
    pub base_speed: f64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PlayerStats {
    /// Full-health stats for `character`, or engine defaults when none is
    /// selected.
    pub fn new(character: Option<&CharacterDefinition>) -> Self {
        let (base_max_hp, base_speed) = character
            .map(|c| (c.base_max_hp, c.base_speed))
            .unwrap_or((DEFAULT_BASE_MAX_HP, DEFAULT_BASE_SPEED));
        Self {
            max_hp: base_max_hp,
            hp: base_max_hp,
            speed: base_speed,
            damage_multiplier: 1.0,
            fire_rate_reduction: 0.0,
            bonus_projectiles: 0,
            base_max_hp,
            base_speed,
        }
    }

    /// Recompute every derived value from current stat levels.
    ///
    /// Rounding is half-to-even throughout.
    /// Gaining max HP scales current HP by the previous ratio; current HP
    /// never exceeds max HP afterwards.
    pub fn recalculate(&mut self, stats: &[StatInstance]) {
        let bonus_of = |kind: StatKind| {
            stats
                .iter()
                .find(|s| *s.kind() == kind)
                .map(bonus)
                .unwrap_or(0.0)
        };

        let old_max = self.max_hp;
        let new_max =
            self.base_max_hp + bonus_of(StatKind::Health).round_ties_even() as u32;
        if new_max > old_max && old_max > 0 {
            let ratio = self.hp as f64 / old_max as f64;
            self.hp = (ratio * new_max as f64).round_ties_even() as u32;
        }
        self.max_hp = new_max;
        self.hp = self.hp.min(self.max_hp);

        self.speed = self.base_speed * (1.0 + bonus_of(StatKind::Speed));
        self.damage_multiplier = 1.0 + bonus_of(StatKind::Damage);
        self.fire_rate_reduction = bonus_of(StatKind::FireRate);
        self.bonus_projectiles =
            bonus_of(StatKind::ProjectileQuantity).round_ties_even() as u32;

        tracing::debug!(
            max_hp = self.max_hp,
            hp = self.hp,
            speed = self.speed,
            damage_multiplier = self.damage_multiplier,
            fire_rate_reduction = self.fire_rate_reduction,
            bonus_projectiles = self.bonus_projectiles,
            "player stats recalculated"
        );
    }

    /// Seconds between shots for `weapon`
    pub fn weapon_fire_interval(&self, weapon: &WeaponInstance) -> f64 {
        weapon.fire_rate * (1.0 - self.fire_rate_reduction)
    }

    pub fn projectile_count(&self, weapon: &WeaponInstance) -> u32 {
        weapon.projectile_count + self.bonus_projectiles
    }

    pub fn projectile_damage(&self, weapon: &WeaponInstance) -> u32 {
        (weapon.damage as f64 * self.damage_multiplier).round_ties_even() as u32
    }

    /// Launch angles in degrees, fanned symmetrically around zero.
    pub fn spread_angles(&self, weapon: &WeaponInstance) -> Vec<f64> {
        let count = self.projectile_count(weapon);
        if count <= 1 {
            return vec![0.0; count as usize];
        }
        let spread = weapon.spread_angle;
        let start = -spread * (count - 1) as f64 / 2.0;
        (0..count).map(|i| start + spread * i as f64).collect()
    }

    /// Remove one HP. Returns true when the player is dead.
    pub fn take_hit(&mut self) -> bool {
        self.hp = self.hp.saturating_sub(1);
        self.is_dead()
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StatDefinition, WeaponDefinition};
    use std::sync::Arc;

    fn stats_at(levels: &[(StatKind, u32)]) -> Vec<StatInstance> {
        StatKind::CORE
            .iter()
            .cloned()
            .map(|kind| {
                let mut stat = StatInstance::new(Arc::new(StatDefinition::new(kind.clone())));
                if let Some((_, level)) = levels.iter().find(|(k, _)| *k == kind) {
                    stat.is_unlocked = true;
                    stat.level = *level;
                }
                stat
            })
            .collect()
    }

    fn wand() -> WeaponInstance {
        WeaponInstance::new(Arc::new(WeaponDefinition::new("wand", "Wand")))
    }

    #[test]
    fn test_base_values_without_character() {
        let stats = PlayerStats::new(None);
        assert_eq!(stats.max_hp, 3);
        assert_eq!(stats.hp, 3);
        assert_eq!(stats.speed, 6.0);
        assert_eq!(stats.damage_multiplier, 1.0);
        assert_eq!(stats.bonus_projectiles, 0);
    }

    #[test]
    fn test_character_base_values() {
        let character = CharacterDefinition {
            base_speed: 7.5,
            base_max_hp: 4,
            ..CharacterDefinition::new("chariot", "The Chariot")
        };
        let stats = PlayerStats::new(Some(&character));
        assert_eq!(stats.max_hp, 4);
        assert_eq!(stats.speed, 7.5);
    }

    #[test]
    fn test_recalculate_with_no_levels_keeps_base() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[]));
        assert_eq!(stats, PlayerStats::new(None));
    }

    #[test]
    fn test_recalculate_applies_bonuses() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[
            (StatKind::Speed, 2),
            (StatKind::Damage, 1),
            (StatKind::FireRate, 5),
            (StatKind::ProjectileQuantity, 2),
        ]));
        assert_eq!(stats.speed, 12.0); // 6 * (1 + 1.0)
        assert_eq!(stats.damage_multiplier, 1.5);
        assert_eq!(stats.fire_rate_reduction, 0.8);
        assert_eq!(stats.bonus_projectiles, 2);
    }

    #[test]
    fn test_max_hp_gain_scales_current_hp() {
        let mut stats = PlayerStats::new(None);
        stats.hp = 2;
        stats.recalculate(&stats_at(&[(StatKind::Health, 3)]));
        assert_eq!(stats.max_hp, 6);
        assert_eq!(stats.hp, 4); // 2/3 of 6
    }

    #[test]
    fn test_full_hp_stays_full_after_gain() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[(StatKind::Health, 1)]));
        assert_eq!(stats.max_hp, 4);
        assert_eq!(stats.hp, 4);
    }

    #[test]
    fn test_hp_clamped_when_max_drops() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[(StatKind::Health, 2)]));
        assert_eq!(stats.hp, 5);
        stats.recalculate(&stats_at(&[]));
        assert_eq!(stats.max_hp, 3);
        assert_eq!(stats.hp, 3);
    }

    #[test]
    fn test_weapon_effective_values() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[
            (StatKind::Damage, 1),
            (StatKind::FireRate, 1),
            (StatKind::ProjectileQuantity, 1),
        ]));
        let mut weapon = wand();
        weapon.damage = 3;

        assert!((stats.weapon_fire_interval(&weapon) - 0.67).abs() < 1e-9);
        assert_eq!(stats.projectile_count(&weapon), 2);
        assert_eq!(stats.projectile_damage(&weapon), 4); // 4.5 rounds to even
    }

    #[test]
    fn test_projectile_damage_ties_round_to_even() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[(StatKind::Damage, 1)]));
        let mut weapon = wand();
        for (damage, expected) in [(1, 2), (3, 4), (5, 8), (7, 10)] {
            weapon.damage = damage;
            assert_eq!(stats.projectile_damage(&weapon), expected, "damage {damage}");
        }
    }

    #[test]
    fn test_hp_rescale_ties_round_to_even() {
        let mut stats = PlayerStats::new(None);
        stats.recalculate(&stats_at(&[(StatKind::Health, 1)]));
        stats.hp = 1;
        // 1/4 of 6 is 1.5
        stats.recalculate(&stats_at(&[(StatKind::Health, 3)]));
        assert_eq!(stats.max_hp, 6);
        assert_eq!(stats.hp, 2);
    }

    #[test]
    fn test_spread_angles() {
        let mut stats = PlayerStats::new(None);
        let weapon = wand();
        assert_eq!(stats.spread_angles(&weapon), vec![0.0]);

        stats.bonus_projectiles = 2;
        assert_eq!(stats.spread_angles(&weapon), vec![-10.0, 0.0, 10.0]);

        stats.bonus_projectiles = 1;
        assert_eq!(stats.spread_angles(&weapon), vec![-5.0, 5.0]);
    }

    #[test]
    fn test_take_hit_until_dead() {
        let mut stats = PlayerStats::new(None);
        assert!(!stats.take_hit());
        assert!(!stats.take_hit());
        assert!(stats.take_hit());
        assert!(stats.is_dead());
        // saturates at zero
        assert!(stats.take_hit());
        assert_eq!(stats.hp, 0);
    }
}
