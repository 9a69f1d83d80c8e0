//! Opening loadout
//!
//! Every new character starts with a blade and one healing potion.

use super::item::Item;

/// Bonus granted by the starter sword
pub const STARTER_SWORD_BONUS: u32 = 5;
/// Health restored by the starter potion
pub const STARTER_POTION_HEAL: u32 = 30;

/// Create the items a fresh character begins with
pub fn starter_items() -> Vec<Item> {
    vec![
        Item::equipment("Steel Sword", "A sharp steel blade", STARTER_SWORD_BONUS),
        Item::consumable("Healing Potion", "Restores health", STARTER_POTION_HEAL),
    ]
}
