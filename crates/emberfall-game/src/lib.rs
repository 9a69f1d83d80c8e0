//! Emberfall Game - Game logic and systems
//!
//! Provides items and inventory, the player character, enemy creatures,
//! turn-based combat, the game session, and save files.

pub mod combat;
pub mod error;
pub mod input;
pub mod npc;
pub mod persistence;
pub mod player;
pub mod session;

pub use combat::{calculate_damage, starter_items, Inventory, Item, ItemCategory, ItemEffect, ItemKind};
pub use error::{Defeated, GameError, LoadError, SaveError};
pub use input::{CombatView, PlayerAction, PlayerInput, ScriptedInput};
pub use npc::{Creature, CreatureKind, Tier};
pub use player::{Character, CharacterStats, CharacterStatus, PlayerProgression, StartingStats, StatGrowth};
pub use session::{CombatEvent, CombatSession, CombatState, GameSession, InventoryView, Outcome, Turn};
