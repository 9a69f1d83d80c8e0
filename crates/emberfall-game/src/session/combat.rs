//! Turn-based combat between a character and one creature
//!
//! A [`CombatSession`] alternates player and creature turns until one side
//! reaches zero health. Each resolved turn reports what happened as
//! [`CombatEvent`]s plus an [`Outcome`].

use std::fmt;

use emberfall_core::EventSink;

use crate::combat::item::ItemEffect;
use crate::error::GameError;
use crate::input::{CombatView, PlayerAction, PlayerInput};
use crate::npc::Creature;
use crate::player::{xp_for_creature, Character};

/// Where a fight currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    PlayerTurn,
    EnemyTurn,
    Victory { experience: u32 },
    Defeat,
}

impl CombatState {
    pub fn name(&self) -> &'static str {
        match self {
            CombatState::PlayerTurn => "player turn",
            CombatState::EnemyTurn => "enemy turn",
            CombatState::Victory { .. } => "victory",
            CombatState::Defeat => "defeat",
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, CombatState::Victory { .. } | CombatState::Defeat)
    }
}

/// Result of resolving a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Victory {
        experience: u32,
        /// Set when the reward caused a level-up
        new_level: Option<u32>,
    },
    Defeat,
}

/// Something that happened during a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttacked {
        target: String,
        damage: u32,
    },
    ItemUsed(ItemEffect),
    CreatureAttacked {
        creature: String,
        announcement: &'static str,
        damage: u32,
    },
    /// The chosen action could not be carried out; the turn was not used
    ActionFailed {
        reason: String,
    },
    LevelUp {
        level: u32,
    },
    Victory {
        experience: u32,
    },
    Defeat {
        name: String,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::PlayerAttacked { target, damage: 0 } => {
                write!(f, "Your attack has no effect on {}", target)
            }
            CombatEvent::PlayerAttacked { target, damage } => {
                write!(f, "You hit {} for {} damage", target, damage)
            }
            CombatEvent::ItemUsed(effect) => write!(f, "{}", effect),
            CombatEvent::CreatureAttacked {
                creature,
                announcement,
                damage: 0,
            } => write!(f, "{} {} but deals no damage", creature, announcement),
            CombatEvent::CreatureAttacked {
                creature,
                announcement,
                damage,
            } => write!(f, "{} {} for {} damage", creature, announcement, damage),
            CombatEvent::ActionFailed { reason } => write!(f, "{}", reason),
            CombatEvent::LevelUp { level } => write!(f, "Level up! You are now level {}", level),
            CombatEvent::Victory { experience } => {
                write!(f, "Victory! Gained {} experience", experience)
            }
            CombatEvent::Defeat { name } => write!(f, "{} has been defeated", name),
        }
    }
}

/// Everything one resolved turn produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub events: Vec<CombatEvent>,
    pub outcome: Outcome,
}

impl Turn {
    fn new(events: Vec<CombatEvent>, outcome: Outcome) -> Self {
        Self { events, outcome }
    }
}

/// A fight in progress. Borrows both combatants for its whole duration.
pub struct CombatSession<'a> {
    character: &'a mut Character,
    creature: &'a mut Creature,
    state: CombatState,
}

impl<'a> CombatSession<'a> {
    pub fn new(character: &'a mut Character, creature: &'a mut Creature) -> Self {
        tracing::info!("{} engages {}", character.name(), creature.name);
        Self {
            character,
            creature,
            state: CombatState::PlayerTurn,
        }
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn character(&self) -> &Character {
        &*self.character
    }

    pub fn creature(&self) -> &Creature {
        &*self.creature
    }

    fn expect_state(&self, expected: CombatState) -> Result<(), GameError> {
        if self.state.is_over() {
            return Err(GameError::CombatOver);
        }
        if self.state != expected {
            return Err(GameError::OutOfTurn {
                expected: expected.name(),
                actual: self.state.name(),
            });
        }
        Ok(())
    }

    /// Resolve the player's action.
    ///
    /// A failed item use returns the error and keeps the turn with the player.
    pub fn player_turn(&mut self, action: PlayerAction) -> Result<Turn, GameError> {
        self.expect_state(CombatState::PlayerTurn)?;

        let mut events = Vec::new();
        match action {
            PlayerAction::Attack => {
                let damage = self.character.attack(self.creature);
                events.push(CombatEvent::PlayerAttacked {
                    target: self.creature.name.clone(),
                    damage,
                });
            }
            PlayerAction::UseItem(name) => {
                let effect = self.character.use_item(&name)?;
                events.push(CombatEvent::ItemUsed(effect));
            }
        }
        tracing::debug!(
            "Player turn: {} at {}/{}",
            self.creature.name,
            self.creature.hit_points,
            self.creature.max_hit_points
        );

        if self.creature.is_alive() {
            self.state = CombatState::EnemyTurn;
            return Ok(Turn::new(events, Outcome::Continue));
        }

        let experience = xp_for_creature(self.creature.attack);
        events.push(CombatEvent::Victory { experience });
        let new_level = self.character.gain_experience(experience);
        if let Some(level) = new_level {
            events.push(CombatEvent::LevelUp { level });
        }
        self.state = CombatState::Victory { experience };
        tracing::info!("{} defeated {}", self.character.name(), self.creature.name);

        Ok(Turn::new(events, Outcome::Victory { experience, new_level }))
    }

    /// Resolve the creature's attack
    pub fn enemy_turn(&mut self) -> Result<Turn, GameError> {
        self.expect_state(CombatState::EnemyTurn)?;

        let before = self.character.current_health();
        let result = self.creature.perform_attack(self.character);
        let mut events = vec![CombatEvent::CreatureAttacked {
            creature: self.creature.name.clone(),
            announcement: self.creature.kind.announcement(),
            damage: before - self.character.current_health(),
        }];
        tracing::debug!(
            "Enemy turn: {} at {}/{}",
            self.character.name(),
            self.character.current_health(),
            self.character.max_health()
        );

        match result {
            Ok(_) => {
                self.state = CombatState::PlayerTurn;
                Ok(Turn::new(events, Outcome::Continue))
            }
            Err(defeated) => {
                events.push(CombatEvent::Defeat {
                    name: defeated.name,
                });
                self.state = CombatState::Defeat;
                tracing::info!("{} was slain by {}", self.character.name(), self.creature.name);
                Ok(Turn::new(events, Outcome::Defeat))
            }
        }
    }

    /// Play the fight to the end.
    ///
    /// Actions come from `input`; every event is shown to `input` and written
    /// to `log`. An item that cannot be used is reported and the player is
    /// asked again.
    pub fn run<I, L>(&mut self, input: &mut I, log: &mut L) -> Result<Outcome, GameError>
    where
        I: PlayerInput + ?Sized,
        L: EventSink + ?Sized,
    {
        loop {
            let turn = match self.state {
                CombatState::PlayerTurn => {
                    let view = CombatView {
                        character: &*self.character,
                        creature: &*self.creature,
                    };
                    let action = input.choose_action(&view).ok_or(GameError::InputClosed)?;
                    match self.player_turn(action) {
                        Ok(turn) => turn,
                        Err(GameError::NotFound(name)) => {
                            let event = CombatEvent::ActionFailed {
                                reason: format!("You don't have {}", name),
                            };
                            input.notify(&event);
                            continue;
                        }
                        Err(err) => return Err(err),
                    }
                }
                CombatState::EnemyTurn => self.enemy_turn()?,
                CombatState::Victory { .. } | CombatState::Defeat => {
                    return Err(GameError::CombatOver)
                }
            };

            for event in &turn.events {
                input.notify(event);
                log.record_event(&event.to_string());
            }
            if turn.outcome != Outcome::Continue {
                return Ok(turn.outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::item::Item;
    use crate::input::ScriptedInput;
    use crate::npc::CreatureKind;
    use crate::player::CharacterStats;
    use emberfall_core::MemoryEventLog;

    fn hero() -> Character {
        Character::new("Aria", CharacterStats::new(100, 10, 5))
    }

    #[test]
    fn test_finishing_blow_awards_experience() {
        let mut character = Character::new("Aria", CharacterStats::new(100, 11, 5));
        let mut creature = Creature::new(CreatureKind::ForestGoblin, "Goblin", 8, 8, 3);
        let mut combat = CombatSession::new(&mut character, &mut creature);

        let turn = combat.player_turn(PlayerAction::Attack).unwrap();
        assert_eq!(
            turn.outcome,
            Outcome::Victory {
                experience: 40,
                new_level: None
            }
        );
        assert_eq!(combat.state(), CombatState::Victory { experience: 40 });
        assert!(turn.events.contains(&CombatEvent::Victory { experience: 40 }));
        assert_eq!(character.experience(), 40);
    }

    #[test]
    fn test_victory_can_level_up() {
        let mut character = hero();
        character.gain_experience(90);
        let mut creature = Creature::new(CreatureKind::ForestGoblin, "Goblin", 5, 8, 3);
        let mut combat = CombatSession::new(&mut character, &mut creature);

        let turn = combat.player_turn(PlayerAction::Attack).unwrap();
        assert_eq!(
            turn.outcome,
            Outcome::Victory {
                experience: 40,
                new_level: Some(2)
            }
        );
        assert!(turn.events.contains(&CombatEvent::LevelUp { level: 2 }));
        assert_eq!(character.experience(), 30);
    }

    #[test]
    fn test_turns_alternate() {
        let mut character = hero();
        let mut creature = Creature::spawn(CreatureKind::ForestGoblin);
        let mut combat = CombatSession::new(&mut character, &mut creature);

        assert!(matches!(
            combat.enemy_turn(),
            Err(GameError::OutOfTurn {
                expected: "enemy turn",
                ..
            })
        ));

        let turn = combat.player_turn(PlayerAction::Attack).unwrap();
        assert_eq!(turn.outcome, Outcome::Continue);
        assert_eq!(combat.state(), CombatState::EnemyTurn);
        assert!(matches!(
            combat.player_turn(PlayerAction::Attack),
            Err(GameError::OutOfTurn { .. })
        ));

        let turn = combat.enemy_turn().unwrap();
        assert_eq!(
            turn.events,
            vec![CombatEvent::CreatureAttacked {
                creature: "Forest Goblin".to_string(),
                announcement: "swings its club",
                damage: 3,
            }]
        );
        assert_eq!(combat.state(), CombatState::PlayerTurn);
        assert_eq!(combat.character().current_health(), 97);
        assert_eq!(combat.creature().hit_points, 23);
    }

    #[test]
    fn test_failed_item_keeps_player_turn() {
        let mut character = hero();
        let mut creature = Creature::spawn(CreatureKind::ForestGoblin);
        let mut combat = CombatSession::new(&mut character, &mut creature);

        let err = combat
            .player_turn(PlayerAction::UseItem("Elixir".to_string()))
            .unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
        assert_eq!(combat.state(), CombatState::PlayerTurn);
    }

    #[test]
    fn test_item_use_consumes_turn() {
        let mut character = hero();
        character.add_item(Item::consumable("Healing Potion", "Restores health", 30));
        let mut creature = Creature::spawn(CreatureKind::ForestGoblin);
        let mut combat = CombatSession::new(&mut character, &mut creature);

        let turn = combat
            .player_turn(PlayerAction::UseItem("Healing Potion".to_string()))
            .unwrap();
        assert_eq!(turn.outcome, Outcome::Continue);
        assert_eq!(combat.state(), CombatState::EnemyTurn);
    }

    #[test]
    fn test_defeat_ends_combat() {
        let mut character = hero();
        character.receive_damage(95).unwrap();
        let mut creature = Creature::spawn(CreatureKind::AncientDragon);
        let mut combat = CombatSession::new(&mut character, &mut creature);

        combat.player_turn(PlayerAction::Attack).unwrap();
        let turn = combat.enemy_turn().unwrap();
        assert_eq!(turn.outcome, Outcome::Defeat);
        assert_eq!(
            turn.events.last(),
            Some(&CombatEvent::Defeat {
                name: "Aria".to_string()
            })
        );
        assert_eq!(turn.events[0].to_string(), "Ancient Dragon breathes fire for 5 damage");

        assert!(matches!(combat.enemy_turn(), Err(GameError::CombatOver)));
        assert!(matches!(
            combat.player_turn(PlayerAction::Attack),
            Err(GameError::CombatOver)
        ));
    }

    #[test]
    fn test_run_to_victory() {
        let mut character = hero();
        let mut creature = Creature::spawn(CreatureKind::ForestGoblin);
        let mut input = ScriptedInput::attacks(10);
        let mut log = MemoryEventLog::new();

        let outcome = CombatSession::new(&mut character, &mut creature)
            .run(&mut input, &mut log)
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Victory {
                experience: 40,
                new_level: None
            }
        );
        // 7 damage per hit against 30 hp takes five swings
        assert_eq!(input.remaining(), 5);
        assert_eq!(character.current_health(), 88);
        assert!(log.contains("Victory! Gained 40 experience"));
    }

    #[test]
    fn test_run_reprompts_after_missing_item() {
        let mut character = hero();
        let mut creature = Creature::new(CreatureKind::ForestGoblin, "Goblin", 7, 8, 3);
        let mut input = ScriptedInput::new([
            PlayerAction::UseItem("Elixir".to_string()),
            PlayerAction::Attack,
        ]);
        let mut log = MemoryEventLog::new();

        let outcome = CombatSession::new(&mut character, &mut creature)
            .run(&mut input, &mut log)
            .unwrap();

        assert!(matches!(outcome, Outcome::Victory { .. }));
        assert_eq!(
            input.events()[0],
            CombatEvent::ActionFailed {
                reason: "You don't have Elixir".to_string()
            }
        );
    }

    #[test]
    fn test_run_to_defeat() {
        let mut character = Character::new("Aria", CharacterStats::new(30, 10, 5));
        let mut creature = Creature::spawn(CreatureKind::AncientDragon);
        let mut input = ScriptedInput::attacks(10);
        let mut log = MemoryEventLog::new();

        let outcome = CombatSession::new(&mut character, &mut creature)
            .run(&mut input, &mut log)
            .unwrap();

        assert_eq!(outcome, Outcome::Defeat);
        assert!(!character.is_alive());
        assert!(log.contains("Aria has been defeated"));
    }

    #[test]
    fn test_run_without_input() {
        let mut character = hero();
        let mut creature = Creature::spawn(CreatureKind::UndeadWarrior);
        let mut input = ScriptedInput::attacks(1);
        let mut log = MemoryEventLog::new();

        let result = CombatSession::new(&mut character, &mut creature).run(&mut input, &mut log);
        assert!(matches!(result, Err(GameError::InputClosed)));
    }
}
