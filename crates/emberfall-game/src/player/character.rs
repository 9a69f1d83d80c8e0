//! The player character
//!
//! Owns stats, progression, and the inventory. All health changes go
//! through here so the `0 <= current <= max` invariant holds.

use std::fmt;

use crate::combat::damage::calculate_damage;
use crate::combat::inventory::Inventory;
use crate::combat::item::{Item, ItemEffect, ItemKind};
use crate::error::{Defeated, GameError};
use crate::npc::creature::Creature;

use super::stats::{CharacterStats, PlayerProgression, StatGrowth, XP_PER_LEVEL};

/// A player character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    stats: CharacterStats,
    progression: PlayerProgression,
    inventory: Inventory,
}

impl Character {
    /// Create a level 1 character with an empty inventory.
    ///
    /// Health above the maximum is clamped down to it.
    pub fn new(name: impl Into<String>, mut stats: CharacterStats) -> Self {
        stats.current_hp = stats.current_hp.min(stats.max_hp);
        Self {
            name: name.into(),
            stats,
            progression: PlayerProgression::new(),
            inventory: Inventory::new(),
        }
    }

    /// Reassemble a character from saved parts
    pub(crate) fn from_parts(
        name: String,
        stats: CharacterStats,
        progression: PlayerProgression,
        inventory: Inventory,
    ) -> Self {
        Self {
            name,
            stats,
            progression,
            inventory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn progression(&self) -> &PlayerProgression {
        &self.progression
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn current_health(&self) -> u32 {
        self.stats.current_hp
    }

    pub fn max_health(&self) -> u32 {
        self.stats.max_hp
    }

    pub fn attack_power(&self) -> u32 {
        self.stats.attack
    }

    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn experience(&self) -> u32 {
        self.progression.experience
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Strike a creature. Returns the damage dealt; zero means the blow
    /// did not get through its defense.
    pub fn attack(&self, creature: &mut Creature) -> u32 {
        let damage = calculate_damage(self.stats.attack, creature.defense);
        creature.receive_damage(damage)
    }

    /// Take damage, stopping at zero health.
    ///
    /// Returns the health lost, or [`Defeated`] if health reached zero.
    pub fn receive_damage(&mut self, amount: u32) -> Result<u32, Defeated> {
        let lost = self.stats.take_damage(amount);
        if !self.stats.is_alive() {
            tracing::info!("{} has been defeated", self.name);
            return Err(Defeated {
                name: self.name.clone(),
            });
        }
        Ok(lost)
    }

    /// Heal, capped at max health. Returns the health actually restored.
    pub fn restore_health(&mut self, amount: u32) -> u32 {
        self.stats.heal(amount)
    }

    /// Add experience. Returns the new level if a level-up happened.
    ///
    /// Crossing the threshold grants exactly one level per call; any
    /// surplus experience is kept.
    pub fn gain_experience(&mut self, amount: u32) -> Option<u32> {
        let new_level = self.progression.add_xp(amount)?;
        self.stats.apply_growth(&StatGrowth::default());
        tracing::info!("{} reached level {}", self.name, new_level);
        Some(new_level)
    }

    /// Use the first inventory item named `name`.
    ///
    /// Consumables heal and are removed. Equipment adds its bonus to attack
    /// permanently and stays in the inventory.
    pub fn use_item(&mut self, name: &str) -> Result<ItemEffect, GameError> {
        let item = self
            .inventory
            .find(name)
            .ok_or_else(|| GameError::NotFound(name.to_string()))?;
        let kind = item.kind;
        let effect = item.activate();

        match kind {
            ItemKind::Consumable { heal_amount } => {
                self.restore_health(heal_amount);
                self.inventory.remove(name)?;
            }
            ItemKind::Equipment { damage_bonus } => {
                self.stats.attack = self.stats.attack.saturating_add(damage_bonus);
            }
        }

        tracing::debug!("{}: {}", self.name, effect);
        Ok(effect)
    }

    /// Put an item in the inventory
    pub fn add_item(&mut self, item: Item) {
        self.inventory.add(item);
    }

    /// Snapshot of the character's current numbers
    pub fn status(&self) -> CharacterStatus {
        CharacterStatus {
            name: self.name.clone(),
            health: self.stats.current_hp,
            max_health: self.stats.max_hp,
            attack: self.stats.attack,
            defense: self.stats.defense,
            level: self.progression.level,
            experience: self.progression.experience,
        }
    }
}

/// Display snapshot of a character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterStatus {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
    pub experience: u32,
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Health: {}/{}, Attack: {}, Defense: {}, Level: {}, Experience: {}/{}",
            self.name,
            self.health,
            self.max_health,
            self.attack,
            self.defense,
            self.level,
            self.experience,
            XP_PER_LEVEL
        )
    }
}
