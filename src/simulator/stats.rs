//! Per-run statistics gathered by the runner.

use crate::cards::{CardKind, CardOffer};
use std::collections::BTreeMap;

/// Statistics for a single simulated run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub final_level: u32,
    pub offers: u32,
    pub empty_offers: u32,
    pub short_offers: u32,
    pub cards_offered: BTreeMap<CardKind, u64>,
    pub guarantee_violations: u32,
    pub cards_applied: u32,
    pub cards_ignored: u32,
    pub final_weapons: u32,
    /// Final level per stat, by stat name
    pub final_stat_levels: BTreeMap<String, u32>,
}

impl RunStats {
    /// Record a dealt offer. `expected_stats` is the stat-card guarantee that
    /// applied when it was dealt.
    pub fn record_offer(&mut self, offer: &CardOffer, expected_stats: usize) {
        self.offers += 1;
        if offer.is_short() {
            self.short_offers += 1;
        }
        for card in offer.cards() {
            *self.cards_offered.entry(card.kind()).or_insert(0) += 1;
        }
        if offer.stat_cards() < expected_stats {
            self.guarantee_violations += 1;
        }
    }

    pub fn record_empty_offer(&mut self) {
        self.offers += 1;
        self.empty_offers += 1;
    }

    pub fn total_cards_offered(&self) -> u64 {
        self.cards_offered.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardPayload, UpgradeCard};
    use crate::catalog::{StatDefinition, StatKind, WeaponDefinition};
    use std::sync::Arc;

    fn offer(weapons: usize, stats: usize, requested: usize) -> CardOffer {
        let mut cards = Vec::new();
        for _ in 0..weapons {
            let def = Arc::new(WeaponDefinition::new("wand", "Wand"));
            cards.push(UpgradeCard::new(CardPayload::WeaponUnlock(def), String::new(), None));
        }
        for _ in 0..stats {
            let def = Arc::new(StatDefinition::new(StatKind::Speed));
            cards.push(UpgradeCard::new(CardPayload::StatUnlock(def), String::new(), None));
        }
        CardOffer::new(cards, requested)
    }

    #[test]
    fn test_record_offer_counts_kinds() {
        let mut stats = RunStats::default();
        stats.record_offer(&offer(2, 1, 3), 1);
        assert_eq!(stats.offers, 1);
        assert_eq!(stats.cards_offered[&CardKind::WeaponUnlock], 2);
        assert_eq!(stats.cards_offered[&CardKind::StatUnlock], 1);
        assert_eq!(stats.total_cards_offered(), 3);
        assert_eq!(stats.guarantee_violations, 0);
    }

    #[test]
    fn test_record_offer_flags_violation_and_short() {
        let mut stats = RunStats::default();
        stats.record_offer(&offer(2, 0, 3), 1);
        assert_eq!(stats.guarantee_violations, 1);
        assert_eq!(stats.short_offers, 1);
    }

    #[test]
    fn test_record_empty_offer() {
        let mut stats = RunStats::default();
        stats.record_empty_offer();
        assert_eq!(stats.offers, 1);
        assert_eq!(stats.empty_offers, 1);
    }
}
