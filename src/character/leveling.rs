use crate::core::constants::*;

/// Player level and XP toward the next level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
}

impl Default for Experience {
    fn default() -> Self {
        Self::new()
    }
}

impl Experience {
    pub fn new() -> Self {
        Self {
            level: STARTING_LEVEL,
            xp: 0,
            xp_to_next_level: BASE_XP_TO_NEXT_LEVEL,
        }
    }

    /// Add XP. Returns true when this gain triggered a level-up.
    ///
    /// At most one level is gained per call; XP past the threshold is lost.
    pub fn gain_xp(&mut self, amount: u32) -> bool {
        self.xp = self.xp.saturating_add(amount);
        if self.xp < self.xp_to_next_level {
            return false;
        }
        self.level += 1;
        self.xp = 0;
        self.xp_to_next_level = next_threshold(self.xp_to_next_level);
        tracing::info!(
            level = self.level,
            xp_to_next_level = self.xp_to_next_level,
            "level up"
        );
        true
    }

    /// Fraction of the way to the next level, 0.0..1.0
    pub fn progress(&self) -> f64 {
        if self.xp_to_next_level == 0 {
            return 0.0;
        }
        self.xp as f64 / self.xp_to_next_level as f64
    }
}

/// XP required for the level after one needing `current`.
///
/// Ties round half-to-even. The cast saturates, so the curve flattens at
/// `u32::MAX` after roughly fifty levels.
pub fn next_threshold(current: u32) -> u32 {
    (current as f64 * XP_CURVE_MULTIPLIER).round_ties_even() as u32
}
