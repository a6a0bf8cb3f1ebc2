//! Level-up card generation.

use super::candidates::build_candidates;
use super::distribution::distribute_cards;
use super::types::{CardKind, UpgradeCard};
use crate::progression::ProgressionProvider;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Cards dealt for one level-up. An empty offer means no upgrades are
/// available and play should resume without a menu.
#[derive(Debug, Clone, Default)]
pub struct CardOffer {
    cards: Vec<UpgradeCard>,
    requested: usize,
}

impl CardOffer {
    pub fn new(cards: Vec<UpgradeCard>, requested: usize) -> Self {
        Self { cards, requested }
    }

    pub fn cards(&self) -> &[UpgradeCard] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<UpgradeCard> {
        self.cards
    }

    pub fn get(&self, index: usize) -> Option<&UpgradeCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Fewer cards were dealt than requested
    pub fn is_short(&self) -> bool {
        self.cards.len() < self.requested
    }

    pub fn count_of(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|c| c.kind() == kind).count()
    }

    pub fn stat_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.kind().is_stat()).count()
    }
}

/// Deals upgrade cards using an injected random source.
#[derive(Debug, Clone)]
pub struct CardGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> CardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Deal up to `count` cards from the provider's current state.
    ///
    /// Never fails: a missing provider, an empty pool, or a zero count all
    /// produce an empty offer.
    pub fn generate_cards<P: ProgressionProvider + ?Sized>(
        &mut self,
        provider: Option<&P>,
        count: usize,
    ) -> CardOffer {
        let Some(provider) = provider else {
            tracing::error!("progression state unavailable; no cards generated");
            return CardOffer::new(Vec::new(), count);
        };
        if count == 0 {
            return CardOffer::new(Vec::new(), 0);
        }

        let candidates = build_candidates(provider);
        let cards = distribute_cards(candidates, count, &mut self.rng);

        if cards.is_empty() {
            tracing::warn!(requested = count, "no upgrade cards available");
        } else {
            for card in &cards {
                tracing::debug!(kind = ?card.kind(), title = card.title(), "card dealt");
            }
        }
        CardOffer::new(cards, count)
    }
}

impl CardGenerator<ChaCha8Rng> {
    /// Reproducible generator for tests and simulations
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_catalog, Catalog, CharacterId};
    use crate::progression::Run;
    use std::sync::Arc;

    fn fool_run() -> Run {
        let catalog = Arc::new(builtin_catalog().unwrap());
        Run::for_character(catalog, &CharacterId::new("fool")).unwrap()
    }

    #[test]
    fn test_generate_three_cards() {
        let run = fool_run();
        let mut generator = CardGenerator::from_seed(7);
        let offer = generator.generate_cards(Some(&run), 3);
        assert_eq!(offer.len(), 3);
        assert_eq!(offer.requested(), 3);
        assert!(!offer.is_short());
        assert!(offer.stat_cards() >= 1);
    }

    #[test]
    fn test_missing_provider_yields_empty_offer() {
        let mut generator = CardGenerator::from_seed(7);
        let offer = generator.generate_cards::<Run>(None, 3);
        assert!(offer.is_empty());
        assert!(offer.is_short());
    }

    #[test]
    fn test_zero_count_yields_empty_offer() {
        let run = fool_run();
        let mut generator = CardGenerator::from_seed(7);
        assert!(generator.generate_cards(Some(&run), 0).is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty_offer() {
        let run = Run::new(Arc::new(Catalog::empty()));
        let mut generator = CardGenerator::from_seed(7);
        let offer = generator.generate_cards(Some(&run), 3);
        assert!(offer.is_empty());
    }

    #[test]
    fn test_generation_does_not_mutate_state() {
        let run = fool_run();
        let before = format!("{:?}", run.state());
        let mut generator = CardGenerator::from_seed(1);
        for _ in 0..20 {
            generator.generate_cards(Some(&run), 4);
        }
        assert_eq!(before, format!("{:?}", run.state()));
    }

    #[test]
    fn test_same_seed_same_offer() {
        let run = fool_run();
        let a = CardGenerator::from_seed(99).generate_cards(Some(&run), 3);
        let b = CardGenerator::from_seed(99).generate_cards(Some(&run), 3);
        let titles = |o: &CardOffer| -> Vec<String> {
            o.cards().iter().map(|c| c.display_text().to_string()).collect()
        };
        assert_eq!(titles(&a), titles(&b));
    }

    #[test]
    fn test_count_of_kinds_sums_to_len() {
        let run = fool_run();
        let offer = CardGenerator::from_seed(3).generate_cards(Some(&run), 5);
        let total: usize = CardKind::ALL.iter().map(|&k| offer.count_of(k)).sum();
        assert_eq!(total, offer.len());
    }
}
