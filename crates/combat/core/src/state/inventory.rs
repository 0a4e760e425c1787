//! Bag, equipment and purse.

use std::collections::BTreeMap;
use std::sync::Arc;

use arrayvec::ArrayVec;
use strum::{EnumCount, IntoEnumIterator};

use super::error::InventoryError;
use super::items::{EquipSlot, ItemCatalog, ItemEffect, ItemId, ItemKind};
use crate::config::CombatConfig;
use crate::stats::{EquipmentBonus, StatKind, WeaponBonus};

/// One occupied bag slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagSlot {
    pub item: ItemId,
    pub quantity: u32,
}

/// A consumable offered by the Item submenu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsableItem {
    pub item: ItemId,
    pub quantity: u32,
    pub effect: ItemEffect,
}

/// Player inventory: 20 bag slots, six equipment slots and gold.
///
/// Item semantics (stacking, slots, set membership) come from a shared
/// [`ItemCatalog`]; ids unknown to the catalog are rejected.
#[derive(Clone, Debug)]
pub struct InventoryState {
    catalog: Arc<ItemCatalog>,
    bag: ArrayVec<BagSlot, { CombatConfig::MAX_BAG_SLOTS }>,
    equipped: [Option<ItemId>; EquipSlot::COUNT],
    pub gold: u32,
}

impl InventoryState {
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self {
            catalog,
            bag: ArrayVec::new(),
            equipped: Default::default(),
            gold: 0,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn slots(&self) -> &[BagSlot] {
        &self.bag
    }

    pub fn is_full(&self) -> bool {
        self.bag.is_full()
    }

    /// Adds `count` of an item. Stackables merge into an existing slot first.
    pub fn add_items(&mut self, item: &ItemId, count: u32) -> Result<(), InventoryError> {
        let definition = self
            .catalog
            .get(item)
            .ok_or_else(|| InventoryError::UnknownItem(item.clone()))?;

        if definition.stackable
            && let Some(slot) = self.bag.iter_mut().find(|slot| &slot.item == item)
        {
            slot.quantity += count;
            return Ok(());
        }

        self.bag
            .try_push(BagSlot {
                item: item.clone(),
                quantity: count,
            })
            .map_err(|_| InventoryError::BagFull)
    }

    /// Adds one item. Returns false for unknown items or a full bag.
    pub fn add_item(&mut self, item: &ItemId) -> bool {
        self.add_items(item, 1).is_ok()
    }

    /// Removes `count` of an item from its first slot holding enough.
    pub fn remove_item(&mut self, item: &ItemId, count: u32) -> bool {
        let Some(index) = self
            .bag
            .iter()
            .position(|slot| &slot.item == item && slot.quantity >= count)
        else {
            return false;
        };
        self.bag[index].quantity -= count;
        if self.bag[index].quantity == 0 {
            self.bag.remove(index);
        }
        true
    }

    pub fn count(&self, item: &ItemId) -> u32 {
        self.bag
            .iter()
            .filter(|slot| &slot.item == item)
            .map(|slot| slot.quantity)
            .sum()
    }

    pub fn has_item(&self, item: &ItemId) -> bool {
        self.count(item) > 0
    }

    /// Consumables in bag order.
    pub fn usable_items(&self) -> Vec<UsableItem> {
        self.bag
            .iter()
            .filter_map(|slot| match self.catalog.get(&slot.item).map(|d| &d.kind) {
                Some(ItemKind::Consumable(effect)) => Some(UsableItem {
                    item: slot.item.clone(),
                    quantity: slot.quantity,
                    effect: *effect,
                }),
                _ => None,
            })
            .collect()
    }

    /// Removes one consumable and returns its effect. The caller applies it.
    pub fn consume(&mut self, item: &ItemId) -> Option<ItemEffect> {
        let effect = match self.catalog.get(item).map(|d| &d.kind) {
            Some(ItemKind::Consumable(effect)) => *effect,
            _ => return None,
        };
        self.remove_item(item, 1).then_some(effect)
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&ItemId> {
        self.equipped[slot.index()].as_ref()
    }

    /// Moves an item from the bag into its slot. Returns what it replaced.
    pub fn equip(&mut self, item: &ItemId) -> Result<Option<ItemId>, InventoryError> {
        let definition = self
            .catalog
            .get(item)
            .ok_or_else(|| InventoryError::UnknownItem(item.clone()))?;
        let slot = definition
            .kind
            .equip_slot()
            .ok_or_else(|| InventoryError::NotEquippable(item.clone()))?;
        if !self.remove_item(item, 1) {
            return Err(InventoryError::NotInBag(item.clone()));
        }

        let previous = self.equipped[slot.index()].take();
        if let Some(old) = &previous
            && let Err(err) = self.add_items(old, 1)
        {
            // Roll back: the bag could not take the old piece.
            self.equipped[slot.index()] = previous.clone();
            let _ = self.add_items(item, 1);
            return Err(err);
        }
        self.equipped[slot.index()] = Some(item.clone());
        Ok(previous)
    }

    /// Moves the item in `slot` back into the bag.
    pub fn unequip(&mut self, slot: EquipSlot) -> Result<ItemId, InventoryError> {
        let item = self.equipped[slot.index()]
            .clone()
            .ok_or(InventoryError::SlotEmpty(slot))?;
        self.add_items(&item, 1)?;
        self.equipped[slot.index()] = None;
        Ok(item)
    }

    /// Sum of equipped item stats plus every reached set bonus.
    pub fn equipment_bonus(&self) -> EquipmentBonus {
        let mut set_counts: BTreeMap<&str, u32> = BTreeMap::new();
        let mut total = EquipmentBonus::default();

        for slot in EquipSlot::iter() {
            let Some(definition) = self.equipped(slot).and_then(|id| self.catalog.get(id)) else {
                continue;
            };
            if let Some(stats) = definition.kind.equip_stats() {
                total = total + *stats;
            }
            if let Some(set) = &definition.set {
                *set_counts.entry(set.as_str()).or_default() += 1;
            }
        }

        for (set, worn) in set_counts {
            if let Some(set) = self.catalog.set(set) {
                total = total + set.bonus_for(worn);
            }
        }
        total
    }

    pub fn equipped_weapon(&self) -> Option<WeaponBonus> {
        let item = self.equipped(EquipSlot::Weapon)?;
        match &self.catalog.get(item)?.kind {
            ItemKind::Weapon { style, stats } => Some(WeaponBonus {
                item: item.clone(),
                attack: stats.atk,
                style: *style,
            }),
            _ => None,
        }
    }

    /// Defense granted by equipment, sets included.
    pub fn total_defense(&self) -> u32 {
        self.equipment_bonus().def
    }

    pub fn stat_bonus(&self, stat: StatKind) -> u32 {
        self.equipment_bonus().stat(stat)
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::CombatMode;
    use crate::state::items::{ItemDefinition, ItemSet, SetBonus};

    fn catalog() -> Arc<ItemCatalog> {
        let armor = |slot, def, str| ItemKind::Armor {
            slot,
            stats: EquipmentBonus {
                def,
                str,
                ..Default::default()
            },
        };
        let catalog = ItemCatalog::new()
            .with_item(ItemDefinition::new(
                "miruvor",
                "Miruvor",
                ItemKind::Consumable(ItemEffect::new(40, 0)),
            ))
            .with_item(ItemDefinition::new("goblin_ear", "Goblin Ear", ItemKind::Material))
            .with_item(ItemDefinition::new(
                "ranger_sword",
                "Ranger Sword",
                ItemKind::Weapon {
                    style: CombatMode::Melee,
                    stats: EquipmentBonus {
                        atk: 5,
                        str: 1,
                        ..Default::default()
                    },
                },
            ))
            .with_item(ItemDefinition::new(
                "wood_sword",
                "Wood Sword",
                ItemKind::Weapon {
                    style: CombatMode::Melee,
                    stats: EquipmentBonus {
                        atk: 2,
                        ..Default::default()
                    },
                },
            ))
            .with_item(
                ItemDefinition::new("mithril_coat", "Mithril Coat", armor(EquipSlot::Armor, 12, 2))
                    .in_set("mithril"),
            )
            .with_item(
                ItemDefinition::new("mithril_helm", "Mithril Helm", armor(EquipSlot::Helmet, 4, 0))
                    .in_set("mithril"),
            )
            .with_set(ItemSet {
                id: "mithril".into(),
                pieces: vec!["mithril_coat".into(), "mithril_helm".into()],
                bonuses: vec![SetBonus {
                    pieces: 2,
                    bonus: EquipmentBonus {
                        def: 8,
                        str: 2,
                        ..Default::default()
                    },
                }],
            });
        Arc::new(catalog)
    }

    #[test]
    fn stackables_merge_and_bag_caps() {
        let mut inventory = InventoryState::new(catalog());
        let potion = ItemId::from("miruvor");
        assert!(inventory.add_item(&potion));
        assert!(inventory.add_item(&potion));
        assert_eq!(inventory.slots().len(), 1);
        assert_eq!(inventory.count(&potion), 2);

        let sword = ItemId::from("wood_sword");
        for _ in 0..19 {
            assert!(inventory.add_item(&sword));
        }
        assert!(inventory.is_full());
        assert_eq!(inventory.add_items(&sword, 1), Err(InventoryError::BagFull));
        // stacking still works when full
        assert!(inventory.add_item(&potion));
        assert!(!inventory.add_item(&ItemId::from("nope")));
    }

    #[test]
    fn consume_only_accepts_consumables_in_bag() {
        let mut inventory = InventoryState::new(catalog());
        let potion = ItemId::from("miruvor");
        let ear = ItemId::from("goblin_ear");
        assert_eq!(inventory.consume(&potion), None);
        inventory.add_item(&potion);
        inventory.add_item(&ear);
        assert_eq!(inventory.usable_items().len(), 1);
        assert_eq!(inventory.consume(&ear), None);
        assert_eq!(inventory.consume(&potion), Some(ItemEffect::new(40, 0)));
        assert!(!inventory.has_item(&potion));
        assert!(inventory.usable_items().is_empty());
    }

    #[test]
    fn equip_swaps_with_bag() {
        let mut inventory = InventoryState::new(catalog());
        let wood = ItemId::from("wood_sword");
        let ranger = ItemId::from("ranger_sword");
        inventory.add_item(&wood);
        inventory.add_item(&ranger);

        assert_eq!(inventory.equip(&wood), Ok(None));
        assert_eq!(inventory.equipped_weapon().map(|w| w.attack), Some(2));
        assert_eq!(inventory.equip(&ranger), Ok(Some(wood.clone())));
        assert!(inventory.has_item(&wood));
        assert!(!inventory.has_item(&ranger));
        assert_eq!(inventory.stat_bonus(StatKind::Str), 1);

        assert_eq!(inventory.unequip(EquipSlot::Weapon), Ok(ranger));
        assert!(inventory.equipped_weapon().is_none());
        assert_eq!(
            inventory.unequip(EquipSlot::Weapon),
            Err(InventoryError::SlotEmpty(EquipSlot::Weapon))
        );
        assert_eq!(
            inventory.equip(&ItemId::from("goblin_ear")),
            Err(InventoryError::NotEquippable(ItemId::from("goblin_ear")))
        );
    }

    #[test]
    fn set_bonus_applies_with_both_pieces() {
        let mut inventory = InventoryState::new(catalog());
        let coat = ItemId::from("mithril_coat");
        let helm = ItemId::from("mithril_helm");
        inventory.add_item(&coat);
        inventory.add_item(&helm);
        inventory.equip(&coat).unwrap();
        assert_eq!(inventory.total_defense(), 12);
        inventory.equip(&helm).unwrap();
        assert_eq!(inventory.total_defense(), 12 + 4 + 8);
        assert_eq!(inventory.stat_bonus(StatKind::Str), 2 + 2);
    }

    #[test]
    fn gold_cannot_go_negative() {
        let mut inventory = InventoryState::new(catalog());
        inventory.add_gold(10);
        assert!(!inventory.spend_gold(11));
        assert!(inventory.spend_gold(10));
        assert_eq!(inventory.gold, 0);
    }
}
