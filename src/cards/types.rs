use crate::catalog::{StatDefinition, WeaponDefinition, WeaponUpgradeDefinition};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CardKind {
    WeaponUnlock,
    WeaponUpgrade,
    StatUnlock,
    StatUpgrade,
}

impl CardKind {
    pub const ALL: [CardKind; 4] = [
        CardKind::WeaponUnlock,
        CardKind::WeaponUpgrade,
        CardKind::StatUnlock,
        CardKind::StatUpgrade,
    ];

    pub fn is_stat(&self) -> bool {
        matches!(self, CardKind::StatUnlock | CardKind::StatUpgrade)
    }

    pub fn is_weapon(&self) -> bool {
        !self.is_stat()
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardKind::WeaponUnlock => "Weapon Unlock",
            CardKind::WeaponUpgrade => "Weapon Upgrade",
            CardKind::StatUnlock => "Stat Unlock",
            CardKind::StatUpgrade => "Stat Upgrade",
        }
    }
}

/// What a card does when applied. Exactly one payload per kind.
#[derive(Debug, Clone)]
pub enum CardPayload {
    WeaponUnlock(Arc<WeaponDefinition>),
    WeaponUpgrade(Arc<WeaponUpgradeDefinition>),
    StatUnlock(Arc<StatDefinition>),
    StatUpgrade(Arc<StatDefinition>),
}

impl CardPayload {
    pub fn kind(&self) -> CardKind {
        match self {
            CardPayload::WeaponUnlock(_) => CardKind::WeaponUnlock,
            CardPayload::WeaponUpgrade(_) => CardKind::WeaponUpgrade,
            CardPayload::StatUnlock(_) => CardKind::StatUnlock,
            CardPayload::StatUpgrade(_) => CardKind::StatUpgrade,
        }
    }
}

/// An offered upgrade. Display text and icon are captured when the card is
/// generated and stay fixed even if state changes before it is applied.
#[derive(Debug, Clone)]
pub struct UpgradeCard {
    payload: CardPayload,
    display_text: String,
    icon: Option<String>,
}

impl UpgradeCard {
    pub fn new(payload: CardPayload, display_text: String, icon: Option<String>) -> Self {
        Self {
            payload,
            display_text,
            icon,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &CardPayload {
        &self.payload
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// First line of the display text
    pub fn title(&self) -> &str {
        self.display_text.lines().next().unwrap_or("")
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}
