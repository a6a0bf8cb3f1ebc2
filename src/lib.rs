//! Arcana - roguelite level-up upgrade cards
//!
//! Builds the candidate pool of weapon and stat upgrades, deals a hand with a
//! guaranteed share of stat cards, and applies the chosen card to per-run
//! progression state.

pub mod cards;
pub mod catalog;
pub mod character;
pub mod core;
pub mod progression;
pub mod session;
pub mod simulator;
