//! Console menus
//!
//! Maps typed choices onto what the player wants to do next.

use emberfall_game::CreatureKind;

/// A main-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Fight a specific creature
    Fight(CreatureKind),
    /// Fight whatever turns up
    Wander,
    Status,
    Inventory,
    Save,
    Load,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Fight(CreatureKind::ForestGoblin),
        MenuChoice::Fight(CreatureKind::AncientDragon),
        MenuChoice::Fight(CreatureKind::UndeadWarrior),
        MenuChoice::Wander,
        MenuChoice::Status,
        MenuChoice::Inventory,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Quit,
    ];

    /// Parse the number typed at the main menu
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> String {
        match self {
            MenuChoice::Fight(kind) => format!("Fight the {}", kind.name()),
            MenuChoice::Wander => "Wander into the wilds".to_string(),
            MenuChoice::Status => "Show character status".to_string(),
            MenuChoice::Inventory => "Show inventory".to_string(),
            MenuChoice::Save => "Save game".to_string(),
            MenuChoice::Load => "Load game".to_string(),
            MenuChoice::Quit => "Quit".to_string(),
        }
    }

    /// The full main menu, one numbered line per entry
    pub fn render() -> String {
        let mut text = String::from("=== MAIN MENU ===");
        for (i, choice) in Self::ALL.iter().enumerate() {
            text.push_str(&format!("\n{}. {}", i + 1, choice.label()));
        }
        text
    }
}

/// A combat-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatChoice {
    Attack,
    UseItem,
}

impl CombatChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(CombatChoice::Attack),
            "2" => Some(CombatChoice::UseItem),
            _ => None,
        }
    }
}
