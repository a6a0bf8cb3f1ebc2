//! Level-up upgrade cards: candidate pools, hand distribution, generation
//! and application.

pub mod apply;
pub mod candidates;
pub mod display;
pub mod distribution;
pub mod generator;
pub mod types;

pub use apply::{apply_card, ApplyOutcome, CardApplier, StatsChangedListener};
pub use candidates::{build_candidates, Candidates};
pub use distribution::{distribute_cards, stat_guarantee};
pub use generator::{CardGenerator, CardOffer};
pub use types::{CardKind, CardPayload, UpgradeCard};
