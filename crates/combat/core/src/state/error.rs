//! Inventory errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipSlot, ItemId};

/// Errors raised by bag and equipment operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// Item id is not in the catalog.
    #[error("Unknown item {0}")]
    UnknownItem(ItemId),

    /// Item is known but not in the bag.
    #[error("Item {0} is not in the bag")]
    NotInBag(ItemId),

    /// Item has no equipment slot.
    #[error("Item {0} cannot be equipped")]
    NotEquippable(ItemId),

    /// Nothing equipped in the slot.
    #[error("Nothing equipped in {0} slot")]
    SlotEmpty(EquipSlot),

    /// No free bag slot for the item.
    #[error("Bag is full")]
    BagFull,
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            UnknownItem(_) => ErrorSeverity::Validation,
            NotInBag(_) | NotEquippable(_) | SlotEmpty(_) => ErrorSeverity::Validation,
            BagFull => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            UnknownItem(_) => "INVENTORY_UNKNOWN_ITEM",
            NotInBag(_) => "INVENTORY_NOT_IN_BAG",
            NotEquippable(_) => "INVENTORY_NOT_EQUIPPABLE",
            SlotEmpty(_) => "INVENTORY_SLOT_EMPTY",
            BagFull => "INVENTORY_BAG_FULL",
        }
    }
}
