//! Errors raised while loading or validating a catalog.

use super::types::{CharacterId, StatKind, WeaponId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("duplicate weapon id: {0}")]
    DuplicateWeapon(WeaponId),

    #[error("duplicate stat kind: {0}")]
    DuplicateStat(StatKind),

    #[error("duplicate character id: {0}")]
    DuplicateCharacter(CharacterId),

    #[error("upgrade {upgrade} targets unknown weapon {target}")]
    UnknownUpgradeTarget { upgrade: String, target: WeaponId },

    #[error("character {character} starts with unknown weapon {weapon}")]
    UnknownStarterWeapon {
        character: CharacterId,
        weapon: WeaponId,
    },

    #[error("character {character} has arcana number {number} (expected 0-21)")]
    InvalidArcanaNumber { character: CharacterId, number: u8 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
