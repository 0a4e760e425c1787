//! Item definitions and the catalog that indexes them.

use std::collections::BTreeMap;

use crate::action::CombatMode;
use crate::stats::EquipmentBonus;

/// Stable item identifier (`miruvor`, `mithril_coat`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Equipment slots, in display order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Helmet,
    Armor,
    Boots,
    Ring,
    Amulet,
}

impl EquipSlot {
    /// Position in the fixed equipment array.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Effect of drinking or eating a consumable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemEffect {
    pub heal: u32,
    pub restore_mp: u32,
}

impl ItemEffect {
    pub const fn new(heal: u32, restore_mp: u32) -> Self {
        Self { heal, restore_mp }
    }

    pub fn is_empty(&self) -> bool {
        self.heal == 0 && self.restore_mp == 0
    }
}

/// What an item is and what it does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon {
        style: CombatMode,
        stats: EquipmentBonus,
    },
    /// Helmet, body armor or boots.
    Armor {
        slot: EquipSlot,
        stats: EquipmentBonus,
    },
    /// Ring or amulet.
    Accessory {
        slot: EquipSlot,
        stats: EquipmentBonus,
    },
    Consumable(ItemEffect),
    Material,
}

impl ItemKind {
    /// Slot this item occupies when equipped, if any.
    pub fn equip_slot(&self) -> Option<EquipSlot> {
        match self {
            Self::Weapon { .. } => Some(EquipSlot::Weapon),
            Self::Armor { slot, .. } | Self::Accessory { slot, .. } => Some(*slot),
            Self::Consumable(_) | Self::Material => None,
        }
    }

    /// Stat block granted while equipped.
    pub fn equip_stats(&self) -> Option<&EquipmentBonus> {
        match self {
            Self::Weapon { stats, .. } | Self::Armor { stats, .. } | Self::Accessory { stats, .. } => {
                Some(stats)
            }
            Self::Consumable(_) | Self::Material => None,
        }
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self, Self::Consumable(_))
    }
}

/// Static description of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Display name, untranslated.
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stackable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    /// Set this item belongs to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub set: Option<String>,
}

impl ItemDefinition {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        let stackable = kind.is_consumable() || matches!(kind, ItemKind::Material);
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            stackable,
            price: 0,
            set: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn in_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }
}

/// Bonus unlocked once enough pieces of a set are worn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetBonus {
    pub pieces: u32,
    pub bonus: EquipmentBonus,
}

/// Named group of items with threshold bonuses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSet {
    pub id: String,
    pub pieces: Vec<ItemId>,
    pub bonuses: Vec<SetBonus>,
}

impl ItemSet {
    /// Sum of every threshold reached with `worn` pieces.
    pub fn bonus_for(&self, worn: u32) -> EquipmentBonus {
        self.bonuses
            .iter()
            .filter(|tier| worn >= tier.pieces)
            .map(|tier| tier.bonus)
            .sum()
    }
}

/// Lookup table of every item and set known to the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, ItemDefinition>,
    sets: BTreeMap<String, ItemSet>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an item definition.
    pub fn insert(&mut self, definition: ItemDefinition) {
        self.items.insert(definition.id.clone(), definition);
    }

    pub fn insert_set(&mut self, set: ItemSet) {
        self.sets.insert(set.id.clone(), set);
    }

    #[must_use]
    pub fn with_item(mut self, definition: ItemDefinition) -> Self {
        self.insert(definition);
        self
    }

    #[must_use]
    pub fn with_set(mut self, set: ItemSet) -> Self {
        self.insert_set(set);
        self
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn set(&self, id: &str) -> Option<&ItemSet> {
        self.sets.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    pub fn sets(&self) -> impl Iterator<Item = &ItemSet> {
        self.sets.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemDefinition> for ItemCatalog {
    fn from_iter<I: IntoIterator<Item = ItemDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for definition in iter {
            catalog.insert(definition);
        }
        catalog
    }
}
