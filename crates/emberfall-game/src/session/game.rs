//! Game session: one character, one event log, many fights

use std::fmt;
use std::path::Path;

use emberfall_core::EventSink;

use crate::combat::item::Item;
use crate::error::{GameError, LoadError, SaveError};
use crate::input::PlayerInput;
use crate::npc::{Creature, CreatureKind};
use crate::persistence;
use crate::player::{Character, CharacterStats, CharacterStatus};

use super::combat::{CombatSession, Outcome};

/// Printable listing of the character's inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub items: Vec<Item>,
}

impl fmt::Display for InventoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Inventory is empty");
        }
        write!(f, "Inventory:")?;
        for item in &self.items {
            write!(f, "\n- {}", item)?;
        }
        Ok(())
    }
}

/// A running game.
///
/// Once the character is defeated the session is over and refuses any
/// further fights, saves, or loads.
pub struct GameSession<L: EventSink> {
    character: Character,
    log: L,
    over: bool,
}

impl<L: EventSink> GameSession<L> {
    /// Start a game with a fresh character
    pub fn new(name: impl Into<String>, stats: CharacterStats, log: L) -> Self {
        Self::with_character(Character::new(name, stats), log)
    }

    /// Start a game around an existing character
    pub fn with_character(character: Character, mut log: L) -> Self {
        log.record_event(&format!("Game started. Character: {}", character.name()));
        tracing::info!("Game started for '{}'", character.name());
        Self {
            character,
            log,
            over: false,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Fight a freshly spawned creature of `kind` until one side falls
    pub fn start_combat<I>(&mut self, kind: CreatureKind, input: &mut I) -> Result<Outcome, GameError>
    where
        I: PlayerInput + ?Sized,
    {
        if self.over {
            return Err(GameError::SessionOver);
        }

        let mut creature = Creature::spawn(kind);
        self.log.record_event(&format!(
            "Battle between {} and {}",
            self.character.name(),
            creature.name
        ));

        let result = CombatSession::new(&mut self.character, &mut creature).run(input, &mut self.log);
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                self.log.record_event(&format!("Battle interrupted: {}", err));
                return Err(err);
            }
        };

        match outcome {
            Outcome::Victory { experience, .. } => self.log.record_event(&format!(
                "{} defeats {} and gains {} experience",
                self.character.name(),
                creature.name,
                experience
            )),
            Outcome::Defeat => {
                self.over = true;
                self.log.record_event(&format!(
                    "Battle over: {} has been defeated",
                    self.character.name()
                ));
            }
            Outcome::Continue => {}
        }
        Ok(outcome)
    }

    /// Write the character and its inventory to `path`
    pub fn save(&mut self, path: &Path) -> Result<(), SaveError> {
        if self.over {
            return Err(SaveError::SessionOver);
        }
        match persistence::save_character(&self.character, path) {
            Ok(()) => {
                self.log.record_event("Game saved");
                Ok(())
            }
            Err(err) => {
                self.log.record_event(&format!("Save failed: {}", err));
                Err(err)
            }
        }
    }

    /// Replace the character with the one saved at `path`.
    ///
    /// On failure the current character is kept as it was.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        if self.over {
            return Err(LoadError::SessionOver);
        }
        match persistence::load_character(path) {
            Ok(character) => {
                self.character = character;
                self.log.record_event("Game loaded");
                Ok(())
            }
            Err(err) => {
                self.log.record_event(&format!("Load failed: {}", err));
                Err(err)
            }
        }
    }

    pub fn status(&self) -> CharacterStatus {
        self.character.status()
    }

    pub fn inventory_view(&self) -> InventoryView {
        InventoryView {
            items: self.character.inventory().iter().cloned().collect(),
        }
    }

    /// Give the character an item
    pub fn add_item(&mut self, item: Item) {
        self.character.add_item(item);
    }
}
