//! Action rejection errors.
//!
//! None of these end a battle. The session turns each one into an alert
//! entry in the battle log and keeps going.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemId;

/// Reasons a player action can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Skill costs more MP than the player has.
    #[error("Not enough MP: need {required}, have {available}")]
    InsufficientMana { required: u32, available: u32 },

    /// Item menu requested but the bag holds no consumables.
    #[error("No usable items")]
    NoUsableItems,

    /// Selected item disappeared between menu build and confirm.
    #[error("Cannot use item {item}")]
    ItemConsumeFailed { item: ItemId },

    /// Bosses cannot be fled from.
    #[error("Cannot flee from a boss")]
    FleeRefusedBoss,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            InsufficientMana { .. } => "ACTION_INSUFFICIENT_MANA",
            NoUsableItems => "ACTION_NO_USABLE_ITEMS",
            ItemConsumeFailed { .. } => "ACTION_ITEM_CONSUME_FAILED",
            FleeRefusedBoss => "ACTION_FLEE_REFUSED_BOSS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rejection_is_recoverable() {
        let errors = [
            ActionError::InsufficientMana {
                required: 8,
                available: 5,
            },
            ActionError::NoUsableItems,
            ActionError::ItemConsumeFailed {
                item: ItemId::from("miruvor"),
            },
            ActionError::FleeRefusedBoss,
        ];
        for error in &errors {
            assert!(error.severity().is_recoverable());
            assert!(error.error_code().starts_with("ACTION_"));
        }
        assert_eq!(
            errors[0].to_string(),
            "Not enough MP: need 8, have 5"
        );
    }
}
