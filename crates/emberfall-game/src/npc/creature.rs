//! A spawned enemy and its attack behavior

use std::fmt;

use crate::combat::damage::calculate_damage;
use crate::error::Defeated;
use crate::player::Character;

use super::CreatureKind;

/// An enemy in a single encounter. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub kind: CreatureKind,
    pub name: String,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Creature {
    /// Build a fresh creature from its kind's preset
    pub fn spawn(kind: CreatureKind) -> Self {
        let preset = kind.preset();
        Self::new(kind, kind.name(), preset.hit_points, preset.attack, preset.defense)
    }

    pub fn new(
        kind: CreatureKind,
        name: impl Into<String>,
        hit_points: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            hit_points,
            max_hit_points: hit_points,
            attack,
            defense,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Lose hit points, stopping at zero. Returns the damage actually taken.
    pub fn receive_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.hit_points);
        self.hit_points -= taken;
        taken
    }

    /// Strike the character.
    ///
    /// Returns the damage dealt. The only error is the target's own
    /// [`Defeated`], passed through unchanged.
    pub fn perform_attack(&self, target: &mut Character) -> Result<u32, Defeated> {
        let damage = calculate_damage(self.attack, target.defense());
        if damage == 0 {
            return Ok(0);
        }
        tracing::debug!("{} {} for {} damage", self.name, self.kind.announcement(), damage);
        target.receive_damage(damage)
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Health: {}/{}, Attack: {}, Defense: {}",
            self.name, self.hit_points, self.max_hit_points, self.attack, self.defense
        )
    }
}
