//! Combat system module
//!
//! Provides items, the inventory container, starter gear, and the damage rule.

pub mod damage;
pub mod inventory;
pub mod item;
pub mod starter_items;

pub use damage::calculate_damage;
pub use inventory::Inventory;
pub use item::{Item, ItemCategory, ItemEffect, ItemKind};
pub use starter_items::starter_items;
