//! Combat and game-session orchestration

pub mod combat;
pub mod game;

pub use combat::{CombatEvent, CombatSession, CombatState, Outcome, Turn};
pub use game::{GameSession, InventoryView};
