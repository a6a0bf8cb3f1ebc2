//! Stat bonus formulas.
//!
//! | Kind                        | Bonus                     | Consumed as            |
//! |-----------------------------|---------------------------|------------------------|
//! | Health, ProjectileQuantity  | `level * 1.0`             | flat addition          |
//! | Speed, Damage               | `level * 0.5`             | `1 + bonus` multiplier |
//! | FireRate                    | `min(level * 0.33, 0.8)`  | interval reduction     |
//! | anything else               | `level * value_per_level` | host-defined           |

use super::stat::StatInstance;
use crate::catalog::StatKind;
use crate::core::constants::*;

/// Bonus contributed by a stat instance at its current level.
pub fn bonus(stat: &StatInstance) -> f64 {
    bonus_for(
        stat.kind(),
        stat.level,
        stat.is_unlocked,
        stat.definition().value_per_level,
    )
}

/// Bonus for a raw `(kind, level, unlocked)` triple.
pub fn bonus_for(kind: &StatKind, level: u32, is_unlocked: bool, value_per_level: f64) -> f64 {
    if !is_unlocked || level == 0 {
        return 0.0;
    }
    let level = level as f64;
    match kind {
        StatKind::Health | StatKind::ProjectileQuantity => level * ADDITIVE_BONUS_PER_LEVEL,
        StatKind::Speed | StatKind::Damage => level * MULTIPLIER_BONUS_PER_LEVEL,
        StatKind::FireRate => (level * FIRE_RATE_REDUCTION_PER_LEVEL).min(FIRE_RATE_REDUCTION_CAP),
        StatKind::Custom(_) => level * value_per_level,
    }
}
