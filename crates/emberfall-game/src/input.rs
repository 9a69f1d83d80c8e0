//! Player input seam
//!
//! Combat asks a [`PlayerInput`] for each action and tells it what happened.
//! The console front end implements it over stdin/stdout; tests and demos
//! use [`ScriptedInput`].

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::npc::Creature;
use crate::player::Character;
use crate::session::combat::CombatEvent;

/// Something the player can do on their turn
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Strike the creature
    Attack,
    /// Use the first inventory item with this name
    UseItem(String),
}

/// Read-only picture of a fight, handed to the input before each choice
#[derive(Debug, Clone, Copy)]
pub struct CombatView<'a> {
    pub character: &'a Character,
    pub creature: &'a Creature,
}

/// Source of player decisions during combat
pub trait PlayerInput {
    /// Choose the next action. `None` means no more input is coming.
    fn choose_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction>;

    /// Observe a combat event
    fn notify(&mut self, event: &CombatEvent);
}

impl<T: PlayerInput + ?Sized> PlayerInput for &mut T {
    fn choose_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction> {
        (**self).choose_action(view)
    }

    fn notify(&mut self, event: &CombatEvent) {
        (**self).notify(event)
    }
}

/// Replays a fixed list of actions and keeps every event it is shown
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    actions: VecDeque<PlayerAction>,
    events: Vec<CombatEvent>,
}

impl ScriptedInput {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            events: Vec::new(),
        }
    }

    /// Input that attacks `turns` times
    pub fn attacks(turns: usize) -> Self {
        Self::new(std::iter::repeat(PlayerAction::Attack).take(turns))
    }

    /// Actions not yet consumed
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    /// Events received so far
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }
}

impl PlayerInput for ScriptedInput {
    fn choose_action(&mut self, _view: &CombatView<'_>) -> Option<PlayerAction> {
        self.actions.pop_front()
    }

    fn notify(&mut self, event: &CombatEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::npc::CreatureKind;
    use crate::player::CharacterStats;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let hero = Character::new("Aria", CharacterStats::default());
        let goblin = Creature::spawn(CreatureKind::ForestGoblin);
        let view = CombatView {
            character: &hero,
            creature: &goblin,
        };

        let mut input = ScriptedInput::new([
            PlayerAction::UseItem("Healing Potion".to_string()),
            PlayerAction::Attack,
        ]);
        assert_eq!(
            input.choose_action(&view),
            Some(PlayerAction::UseItem("Healing Potion".to_string()))
        );
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.choose_action(&view), Some(PlayerAction::Attack));
        assert_eq!(input.choose_action(&view), None);
    }

    #[test]
    fn test_scripted_input_records_events() {
        let mut input = ScriptedInput::attacks(2);
        input.notify(&CombatEvent::Victory { experience: 40 });
        assert_eq!(input.events(), &[CombatEvent::Victory { experience: 40 }]);
        assert_eq!(input.remaining(), 2);
    }
}
