//! Runtime progression: weapon and stat instances, the per-run state that
//! owns them, and the bonus formulas read by effective-stat consumers.

pub mod bonus;
pub mod provider;
pub mod stat;
pub mod state;
pub mod weapon;

pub use bonus::{bonus, bonus_for};
pub use provider::{ProgressionProvider, Run};
pub use stat::StatInstance;
pub use state::ProgressionState;
pub use weapon::WeaponInstance;
