//! Inventory container
//!
//! An ordered list of items. Names are not required to be unique; lookups
//! always resolve to the first match.

use emberfall_core::record;
use emberfall_core::FormatError;
use serde::{Deserialize, Serialize};

use super::item::{Item, ItemCategory};
use crate::error::GameError;

/// Player inventory container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create a new empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Always succeeds.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove and return the first item named `name`
    pub fn remove(&mut self, name: &str) -> Result<Item, GameError> {
        let index = self
            .position(name)
            .ok_or_else(|| GameError::NotFound(name.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Get the first item named `name`
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Get items filtered by category, with their positions
    pub fn items_of_kind(&self, category: ItemCategory) -> Vec<(usize, &Item)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category() == category)
            .collect()
    }

    /// One record per line, in insertion order
    pub fn serialize(&self) -> String {
        let mut text = String::new();
        for item in &self.items {
            text.push_str(&item.to_record());
            text.push('\n');
        }
        text
    }

    /// Parse an inventory file.
    ///
    /// Lines without a recognized kind prefix are skipped. A line with a
    /// known kind but broken fields fails the whole parse.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut items = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let known = record::record_kind(line)
                .and_then(ItemCategory::from_token)
                .is_some();
            if !known {
                tracing::debug!("Skipping inventory line {}: {:?}", line_no + 1, line);
                continue;
            }
            items.push(Item::from_record(line)?);
        }
        Ok(Self { items })
    }

    /// Replace the contents with a parsed inventory file.
    ///
    /// On error the current contents are left untouched.
    pub fn deserialize(&mut self, text: &str) -> Result<(), FormatError> {
        *self = Self::parse(text)?;
        Ok(())
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sword() -> Item {
        Item::equipment("Steel Sword", "A sharp steel blade", 5)
    }

    fn make_potion(heal: u32) -> Item {
        Item::consumable("Healing Potion", "Restores health", heal)
    }

    #[test]
    fn test_add_and_find() {
        let mut inv = Inventory::new();
        assert!(inv.is_empty());

        inv.add(make_sword());
        inv.add(make_potion(30));

        assert_eq!(inv.len(), 2);
        assert_eq!(inv.find("Steel Sword"), Some(&make_sword()));
        assert!(inv.find("Shield").is_none());
        // find does not remove
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut inv = Inventory::new();
        inv.add(make_potion(10));
        inv.add(make_potion(50));

        assert_eq!(inv.find("Healing Potion"), Some(&make_potion(10)));

        let removed = inv.remove("Healing Potion").unwrap();
        assert_eq!(removed, make_potion(10));
        assert_eq!(inv.find("Healing Potion"), Some(&make_potion(50)));
    }

    #[test]
    fn test_remove_missing() {
        let mut inv = Inventory::new();
        inv.add(make_sword());

        let err = inv.remove("Healing Potion").unwrap_err();
        assert!(matches!(err, GameError::NotFound(ref name) if name == "Healing Potion"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_items_of_kind() {
        let inv: Inventory = vec![make_potion(10), make_sword(), make_potion(20)]
            .into_iter()
            .collect();

        let potions = inv.items_of_kind(ItemCategory::Consumable);
        assert_eq!(potions.len(), 2);
        assert_eq!(potions[0].0, 0);
        assert_eq!(potions[1].0, 2);

        let gear = inv.items_of_kind(ItemCategory::Equipment);
        assert_eq!(gear.len(), 1);
        assert_eq!(gear[0].1.name, "Steel Sword");
    }

    #[test]
    fn test_serialize_format() {
        let inv: Inventory = vec![make_sword(), make_potion(30)].into_iter().collect();
        assert_eq!(
            inv.serialize(),
            "Equipment,Steel Sword,A sharp steel blade,5\nConsumable,Healing Potion,Restores health,30\n"
        );
        assert_eq!(Inventory::new().serialize(), "");
    }

    #[test]
    fn test_serialize_parse_round_trip() {
        let inv: Inventory = vec![make_sword(), make_potion(30), make_potion(30)]
            .into_iter()
            .collect();
        assert_eq!(Inventory::parse(&inv.serialize()).unwrap(), inv);
    }

    #[test]
    fn test_parse_skips_unknown_lines() {
        let text = "Equipment,Steel Sword,A sharp steel blade,5\n\
                    \n\
                    just some text\n\
                    Trinket,Ring,Shiny,1\n\
                    Consumable,Healing Potion,Restores health,30\n";
        let inv = Inventory::parse(text).unwrap();

        assert_eq!(inv.len(), 2);
        assert_eq!(inv.find("Steel Sword"), Some(&make_sword()));
        assert_eq!(inv.find("Healing Potion"), Some(&make_potion(30)));
    }

    #[test]
    fn test_deserialize_resets_contents() {
        let mut inv: Inventory = vec![make_sword()].into_iter().collect();
        inv.deserialize("Consumable,Healing Potion,Restores health,30\n")
            .unwrap();

        assert_eq!(inv.len(), 1);
        assert!(inv.find("Steel Sword").is_none());
    }

    #[test]
    fn test_deserialize_failure_keeps_contents() {
        let mut inv: Inventory = vec![make_sword()].into_iter().collect();
        let result = inv.deserialize("Consumable,Healing Potion,Restores health,lots\n");

        assert!(matches!(result, Err(FormatError::InvalidNumber { .. })));
        assert_eq!(inv.len(), 1);
        assert!(inv.find("Steel Sword").is_some());
    }
}
