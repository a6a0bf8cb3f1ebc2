//! One run from character selection to death: XP, level-up offers, card
//! choices, and the effective player stats they feed.

use crate::cards::{ApplyOutcome, CardApplier, CardGenerator, CardOffer};
use crate::catalog::{Catalog, CharacterId};
use crate::character::{Experience, PlayerStats};
use crate::core::constants::DEFAULT_CARDS_PER_LEVEL;
use crate::progression::Run;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown character: {0}")]
    UnknownCharacter(CharacterId),

    #[error("no upgrade offer is pending")]
    NoPendingOffer,

    #[error("card {index} is out of range for an offer of {len}")]
    InvalidChoice { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub cards_per_level: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cards_per_level: DEFAULT_CARDS_PER_LEVEL,
        }
    }
}

pub struct RunSession<R: Rng> {
    run: Run,
    player: PlayerStats,
    experience: Experience,
    generator: CardGenerator<R>,
    pending: Option<CardOffer>,
    config: SessionConfig,
    levels_gained: u32,
    cards_applied: u32,
}

impl<R: Rng> RunSession<R> {
    pub fn new(
        catalog: Arc<Catalog>,
        character: &CharacterId,
        rng: R,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let run = Run::for_character(catalog, character)
            .ok_or_else(|| SessionError::UnknownCharacter(character.clone()))?;
        let player = fresh_player(&run);
        tracing::info!(character = %character, "run started");
        Ok(Self {
            run,
            player,
            experience: Experience::new(),
            generator: CardGenerator::new(rng),
            pending: None,
            config,
            levels_gained: 0,
            cards_applied: 0,
        })
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.run.catalog()
    }

    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerStats {
        &mut self.player
    }

    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn pending_offer(&self) -> Option<&CardOffer> {
        self.pending.as_ref()
    }

    pub fn levels_gained(&self) -> u32 {
        self.levels_gained
    }

    pub fn cards_applied(&self) -> u32 {
        self.cards_applied
    }

    /// Award XP. On level-up a fresh offer is dealt and returned.
    ///
    /// XP is ignored while an offer is pending. An empty offer is dropped
    /// immediately and play resumes.
    pub fn gain_xp(&mut self, amount: u32) -> Option<&CardOffer> {
        if self.pending.is_some() {
            tracing::debug!(amount, "xp ignored while an offer is pending");
            return None;
        }
        if !self.experience.gain_xp(amount) {
            return None;
        }
        self.levels_gained += 1;

        let offer = self
            .generator
            .generate_cards(Some(&self.run), self.config.cards_per_level);
        if offer.is_empty() {
            tracing::info!(level = self.experience.level, "no upgrades available; resuming");
            return None;
        }
        self.pending = Some(offer);
        self.pending.as_ref()
    }

    /// Apply card `index` of the pending offer and close it.
    pub fn choose_card(&mut self, index: usize) -> Result<ApplyOutcome, SessionError> {
        let offer = self.pending.take().ok_or(SessionError::NoPendingOffer)?;
        let Some(card) = offer.get(index).cloned() else {
            let len = offer.len();
            self.pending = Some(offer);
            return Err(SessionError::InvalidChoice { index, len });
        };

        let mut stats_changed = false;
        let mut applier = CardApplier::new(|| stats_changed = true);
        let outcome = applier.apply(Some(&mut self.run), &card);
        if stats_changed {
            self.player.recalculate(self.run.state().stats());
        }
        if outcome == ApplyOutcome::Applied {
            self.cards_applied += 1;
        }
        tracing::info!(card = card.title(), ?outcome, "card chosen");
        Ok(outcome)
    }

    /// Close the pending offer without applying anything.
    pub fn skip_offer(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Restart with the same character and a clean slate.
    pub fn restart(&mut self) {
        self.run.reset();
        self.player = fresh_player(&self.run);
        self.experience = Experience::new();
        self.pending = None;
        self.levels_gained = 0;
        self.cards_applied = 0;
        tracing::info!("run restarted");
    }
}

impl RunSession<ChaCha8Rng> {
    pub fn seeded(
        catalog: Arc<Catalog>,
        character: &CharacterId,
        seed: u64,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        Self::new(catalog, character, ChaCha8Rng::seed_from_u64(seed), config)
    }
}

fn fresh_player(run: &Run) -> PlayerStats {
    let mut player = PlayerStats::new(run.character().map(|c| c.as_ref()));
    player.recalculate(run.state().stats());
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn fool_session(seed: u64) -> RunSession<ChaCha8Rng> {
        let catalog = Arc::new(builtin_catalog().unwrap());
        RunSession::seeded(
            catalog,
            &CharacterId::new("fool"),
            seed,
            SessionConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_character() {
        let catalog = Arc::new(builtin_catalog().unwrap());
        let err = RunSession::seeded(
            catalog,
            &CharacterId::new("hermit"),
            1,
            SessionConfig::default(),
        )
        .err();
        assert_eq!(
            err,
            Some(SessionError::UnknownCharacter(CharacterId::new("hermit")))
        );
    }

    #[test]
    fn test_level_up_deals_offer() {
        let mut session = fool_session(5);
        assert!(session.gain_xp(3).is_none());
        let offer = session.gain_xp(2).unwrap();
        assert_eq!(offer.len(), 3);
        assert_eq!(session.experience().level, 2);
        assert_eq!(session.levels_gained(), 1);
    }

    #[test]
    fn test_xp_ignored_while_offer_pending() {
        let mut session = fool_session(5);
        session.gain_xp(5);
        assert!(session.gain_xp(100).is_none());
        assert_eq!(session.experience().xp, 0);
        assert_eq!(session.experience().level, 2);
    }

    #[test]
    fn test_choose_without_offer() {
        let mut session = fool_session(5);
        assert_eq!(session.choose_card(0), Err(SessionError::NoPendingOffer));
    }

    #[test]
    fn test_invalid_choice_keeps_offer() {
        let mut session = fool_session(5);
        session.gain_xp(5);
        assert_eq!(
            session.choose_card(7),
            Err(SessionError::InvalidChoice { index: 7, len: 3 })
        );
        assert!(session.pending_offer().is_some());
    }

    #[test]
    fn test_choose_applies_and_closes_offer() {
        let mut session = fool_session(5);
        session.gain_xp(5);
        assert_eq!(session.choose_card(0), Ok(ApplyOutcome::Applied));
        assert!(session.pending_offer().is_none());
        assert_eq!(session.cards_applied(), 1);
    }

    #[test]
    fn test_skip_offer() {
        let mut session = fool_session(5);
        assert!(!session.skip_offer());
        session.gain_xp(5);
        assert!(session.skip_offer());
        assert!(session.pending_offer().is_none());
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut session = fool_session(5);
        session.gain_xp(5);
        session.choose_card(0).unwrap();
        session.player_mut().take_hit();
        session.restart();

        assert_eq!(session.experience(), &Experience::new());
        assert_eq!(session.levels_gained(), 0);
        assert_eq!(session.player().hp, session.player().max_hp);
        assert_eq!(session.run().state().equipped_weapons().len(), 1);
        assert!(session.run().state().stats().iter().all(|s| !s.is_unlocked));
    }
}
