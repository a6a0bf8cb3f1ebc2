use super::bonus::bonus;
use crate::catalog::{StatDefinition, StatKind};
use crate::core::constants::STAT_UNLOCK_LEVEL;
use std::sync::Arc;

/// Runtime record for one stat kind. Starts locked at level 0.
#[derive(Debug, Clone)]
pub struct StatInstance {
    definition: Arc<StatDefinition>,
    pub is_unlocked: bool,
    pub level: u32,
}

impl StatInstance {
    pub fn new(definition: Arc<StatDefinition>) -> Self {
        Self {
            definition,
            is_unlocked: false,
            level: 0,
        }
    }

    pub fn definition(&self) -> &Arc<StatDefinition> {
        &self.definition
    }

    pub fn kind(&self) -> &StatKind {
        &self.definition.kind
    }

    pub fn bonus(&self) -> f64 {
        bonus(self)
    }

    /// Unlock at level 1. Returns false if already unlocked.
    pub fn unlock(&mut self) -> bool {
        if self.is_unlocked {
            return false;
        }
        self.is_unlocked = true;
        self.level = STAT_UNLOCK_LEVEL;
        true
    }

    /// Raise the level by one. A locked stat is unlocked instead.
    pub fn level_up(&mut self) {
        if !self.unlock() {
            self.level = self.level.saturating_add(1);
        }
    }

    pub fn reset(&mut self) {
        self.is_unlocked = false;
        self.level = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health() -> StatInstance {
        StatInstance::new(Arc::new(StatDefinition::new(StatKind::Health)))
    }

    #[test]
    fn test_new_is_locked_level_zero() {
        let stat = health();
        assert!(!stat.is_unlocked);
        assert_eq!(stat.level, 0);
        assert_eq!(stat.bonus(), 0.0);
    }

    #[test]
    fn test_unlock_sets_level_one() {
        let mut stat = health();
        assert!(stat.unlock());
        assert!(stat.is_unlocked);
        assert_eq!(stat.level, 1);
    }

    #[test]
    fn test_unlock_twice_is_noop() {
        let mut stat = health();
        stat.unlock();
        stat.level = 4;
        assert!(!stat.unlock());
        assert_eq!(stat.level, 4);
    }

    #[test]
    fn test_level_up_on_locked_stat_unlocks() {
        let mut stat = health();
        stat.level_up();
        assert!(stat.is_unlocked);
        assert_eq!(stat.level, 1);
    }

    #[test]
    fn test_level_up_increments() {
        let mut stat = health();
        stat.unlock();
        stat.level_up();
        stat.level_up();
        assert_eq!(stat.level, 3);
    }

    #[test]
    fn test_reset() {
        let mut stat = health();
        stat.unlock();
        stat.level_up();
        stat.reset();
        assert!(!stat.is_unlocked);
        assert_eq!(stat.level, 0);
    }
}
