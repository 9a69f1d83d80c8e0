//! Text console front end
//!
//! Reads choices line by line and prints everything the game reports. The
//! same [`Console`] drives the main menu and answers combat prompts as the
//! session's [`PlayerInput`].

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;
use emberfall_core::EventSink;
use emberfall_game::{
    CombatEvent, CombatView, CreatureKind, GameError, GameSession, Inventory, ItemCategory,
    Outcome, PlayerAction, PlayerInput,
};
use tracing::warn;

use crate::menu::{CombatChoice, MenuChoice};
use crate::save;
use crate::settings::FileSettings;

/// How a play session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Defeated,
}

/// Line-oriented console over any reader/writer pair
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print a line. Output failures are logged, not fatal.
    pub fn say(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.writer, "{}", text) {
            warn!("Failed to write to console: {}", e);
        }
    }

    /// Print a prompt and read one line. `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.writer, "{}", prompt).and_then(|_| self.writer.flush()) {
            warn!("Failed to write to console: {}", e);
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!("Failed to read console input: {}", e);
                None
            }
        }
    }

    /// Ask until a non-empty character name is given
    pub fn ask_name(&mut self) -> Option<String> {
        loop {
            let name = self.ask("Enter your character's name: ")?;
            let name = name.trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print the inventory grouped by category, skipping empty groups
    fn list_items(&mut self, inventory: &Inventory) {
        for (heading, category) in [
            ("Equipment:", ItemCategory::Equipment),
            ("Consumables:", ItemCategory::Consumable),
        ] {
            let items = inventory.items_of_kind(category);
            if items.is_empty() {
                continue;
            }
            self.say(heading);
            for (_, item) in items {
                self.say(format!("- {}", item));
            }
        }
    }
}

impl<R: BufRead, W: Write> PlayerInput for Console<R, W> {
    fn choose_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction> {
        self.say("");
        self.say(view.character.status());
        self.say(view.creature);
        loop {
            self.say("Your turn:\n1. Attack\n2. Use item");
            let line = self.ask("Choose an action: ")?;
            match CombatChoice::parse(&line) {
                Some(CombatChoice::Attack) => return Some(PlayerAction::Attack),
                Some(CombatChoice::UseItem) => {
                    if view.character.inventory().is_empty() {
                        self.say("Inventory is empty");
                        continue;
                    }
                    self.list_items(view.character.inventory());
                    let name = self.ask("Item name: ")?;
                    return Some(PlayerAction::UseItem(name.trim().to_string()));
                }
                None => self.say("Invalid choice!"),
            }
        }
    }

    fn notify(&mut self, event: &CombatEvent) {
        self.say(event);
    }
}

/// Run the main menu until the player quits, input ends, or the character dies
pub fn play<R, W, L>(
    console: &mut Console<R, W>,
    session: &mut GameSession<L>,
    files: &FileSettings,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    L: EventSink,
{
    loop {
        console.say("");
        console.say(MenuChoice::render());
        let Some(line) = console.ask("Choose an action: ") else {
            return Ok(SessionEnd::Quit);
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            console.say("Invalid choice!");
            continue;
        };

        match choice {
            MenuChoice::Fight(kind) => {
                if fight(console, session, kind)? {
                    return Ok(SessionEnd::Defeated);
                }
            }
            MenuChoice::Wander => {
                let kind = CreatureKind::random(&mut rand::thread_rng());
                if fight(console, session, kind)? {
                    return Ok(SessionEnd::Defeated);
                }
            }
            MenuChoice::Status => console.say(session.status()),
            MenuChoice::Inventory => console.say(session.inventory_view()),
            MenuChoice::Save => {
                let Some(name) = console.ask("Save name (Enter for default): ") else {
                    return Ok(SessionEnd::Quit);
                };
                let path = save::save_path(files, Some(&name));
                match session.save(&path) {
                    Ok(()) => console.say(format!("Game saved to {}", path.display())),
                    Err(e) => console.say(format!("Save failed: {}", e)),
                }
            }
            MenuChoice::Load => {
                let Some(name) = console.ask("Save name (Enter for default): ") else {
                    return Ok(SessionEnd::Quit);
                };
                let path = save::save_path(files, Some(&name));
                match session.load(&path) {
                    Ok(()) => console.say("Game loaded!"),
                    Err(e) => console.say(format!("Load failed: {}", e)),
                }
            }
            MenuChoice::Quit => return Ok(SessionEnd::Quit),
        }
    }
}

/// One encounter. Returns whether the character was defeated.
fn fight<R, W, L>(
    console: &mut Console<R, W>,
    session: &mut GameSession<L>,
    kind: CreatureKind,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
    L: EventSink,
{
    console.say("");
    console.say(format!("=== A {} appears! ===", kind.name()));

    match session.start_combat(kind, console) {
        Ok(Outcome::Defeat) => {
            console.say("Game over");
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(GameError::InputClosed) => {
            console.say("The fight is abandoned.");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
