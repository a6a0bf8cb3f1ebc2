//! Committing a chosen card to progression state.

use super::types::{CardPayload, UpgradeCard};
use crate::progression::ProgressionProvider;

/// Notified synchronously after every card application so the host can
/// recompute effective player stats.
pub trait StatsChangedListener {
    fn on_stats_changed(&mut self);
}

impl<F: FnMut()> StatsChangedListener for F {
    fn on_stats_changed(&mut self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// State changed
    Applied,
    /// Stale or invalid card, or no state to apply to; nothing changed
    Ignored,
}

/// Apply a card's effect without notifying anyone.
///
/// Stale cards (weapon already equipped, cap reached, weapon no longer
/// equipped, stat already unlocked) are ignored.
pub fn apply_card<P: ProgressionProvider + ?Sized>(
    provider: &mut P,
    card: &UpgradeCard,
) -> ApplyOutcome {
    let changed = match card.payload() {
        CardPayload::WeaponUnlock(weapon) => provider.unlock_weapon(weapon),
        CardPayload::WeaponUpgrade(upgrade) => {
            provider.upgrade_weapon(&upgrade.target, upgrade.kind)
        }
        CardPayload::StatUnlock(stat) => provider.unlock_stat(&stat.kind),
        CardPayload::StatUpgrade(stat) => provider.upgrade_stat(&stat.kind),
    };
    if changed {
        ApplyOutcome::Applied
    } else {
        tracing::debug!(kind = ?card.kind(), title = card.title(), "stale card ignored");
        ApplyOutcome::Ignored
    }
}

/// The single mutation point for level-up choices.
#[derive(Debug)]
pub struct CardApplier<L: StatsChangedListener> {
    listener: L,
}

impl<L: StatsChangedListener> CardApplier<L> {
    pub fn new(listener: L) -> Self {
        Self { listener }
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Apply `card` and fire the stats-changed notification once.
    ///
    /// Without a provider nothing happens and no notification is sent.
    pub fn apply<P: ProgressionProvider + ?Sized>(
        &mut self,
        provider: Option<&mut P>,
        card: &UpgradeCard,
    ) -> ApplyOutcome {
        let Some(provider) = provider else {
            tracing::error!("progression state unavailable; card not applied");
            return ApplyOutcome::Ignored;
        };
        let outcome = apply_card(provider, card);
        self.listener.on_stats_changed();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_catalog, CharacterId, StatKind, WeaponId};
    use crate::progression::Run;
    use std::cell::Cell;
    use std::sync::Arc;

    fn fool_run() -> Run {
        let catalog = Arc::new(builtin_catalog().unwrap());
        Run::for_character(catalog, &CharacterId::new("fool")).unwrap()
    }

    fn stat_card(run: &Run, kind: StatKind, upgrade: bool) -> UpgradeCard {
        let def = Arc::clone(run.catalog().stat(&kind).unwrap());
        let payload = if upgrade {
            CardPayload::StatUpgrade(def)
        } else {
            CardPayload::StatUnlock(def)
        };
        UpgradeCard::new(payload, String::new(), None)
    }

    #[test]
    fn test_listener_fires_once_per_application() {
        let mut run = fool_run();
        let fired = Cell::new(0);
        let mut applier = CardApplier::new(|| fired.set(fired.get() + 1));

        let card = stat_card(&run, StatKind::Speed, false);
        assert_eq!(applier.apply(Some(&mut run), &card), ApplyOutcome::Applied);
        assert_eq!(fired.get(), 1);

        // A stale repeat still notifies
        assert_eq!(applier.apply(Some(&mut run), &card), ApplyOutcome::Ignored);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_missing_provider_does_not_notify() {
        let run = fool_run();
        let fired = Cell::new(0);
        let mut applier = CardApplier::new(|| fired.set(fired.get() + 1));
        let card = stat_card(&run, StatKind::Speed, false);
        assert_eq!(applier.apply::<Run>(None, &card), ApplyOutcome::Ignored);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_weapon_upgrade_for_unequipped_weapon_is_ignored() {
        let mut run = fool_run();
        let upgrade = run
            .catalog()
            .upgrades_for(&WeaponId::new("cup"))
            .next()
            .map(Arc::clone)
            .unwrap();
        let card = UpgradeCard::new(CardPayload::WeaponUpgrade(upgrade), String::new(), None);
        assert_eq!(apply_card(&mut run, &card), ApplyOutcome::Ignored);
        assert!(!run.state().has_weapon(&WeaponId::new("cup")));
    }

    #[test]
    fn test_stat_upgrade_on_locked_stat_unlocks() {
        let mut run = fool_run();
        let card = stat_card(&run, StatKind::FireRate, true);
        assert_eq!(apply_card(&mut run, &card), ApplyOutcome::Applied);
        let stat = run.state().stat(&StatKind::FireRate).unwrap();
        assert!(stat.is_unlocked);
        assert_eq!(stat.level, 1);
    }
}
