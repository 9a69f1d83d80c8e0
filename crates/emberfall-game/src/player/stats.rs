//! Player stats and progression system
//!
//! Provides character stats, leveling, and XP calculations.

use serde::{Deserialize, Serialize};

/// Experience needed for each level-up
pub const XP_PER_LEVEL: u32 = 100;

/// Experience awarded per point of a defeated creature's attack
pub const XP_PER_CREATURE_ATTACK: u32 = 5;

/// Starting stats for a brand-new character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingStats {
    /// Starting (and maximum) health
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            health: 100,
            attack: 10,
            defense: 5,
        }
    }
}

/// Core combat stats for the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Maximum health points
    pub max_hp: u32,
    /// Current health points, never above `max_hp`
    pub current_hp: u32,
    /// Attack power
    pub attack: u32,
    /// Defense (flat damage reduction)
    pub defense: u32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::from(StartingStats::default())
    }
}

impl From<StartingStats> for CharacterStats {
    fn from(start: StartingStats) -> Self {
        Self::new(start.health, start.attack, start.defense)
    }
}

impl CharacterStats {
    /// Create new stats with full HP
    pub fn new(max_hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
            attack,
            defense,
        }
    }

    /// Whether this character is alive
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Lose health, stopping at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Heal by a flat amount, capped at max HP. Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp.saturating_sub(self.current_hp));
        self.current_hp += restored;
        restored
    }

    /// Apply level-up stat growth
    pub fn apply_growth(&mut self, growth: &StatGrowth) {
        self.max_hp = self.max_hp.saturating_add(growth.hp_per_level);
        self.attack = self.attack.saturating_add(growth.attack_per_level);
        self.defense = self.defense.saturating_add(growth.defense_per_level);
        // Full heal on level up
        self.current_hp = self.max_hp;
    }
}

/// Per-level stat growth rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatGrowth {
    /// HP gained per level
    pub hp_per_level: u32,
    /// Attack gained per level
    pub attack_per_level: u32,
    /// Defense gained per level
    pub defense_per_level: u32,
}

impl Default for StatGrowth {
    fn default() -> Self {
        Self {
            hp_per_level: 10,
            attack_per_level: 2,
            defense_per_level: 1,
        }
    }
}

/// Player-specific progression data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgression {
    /// Current level (starts at 1)
    pub level: u32,
    /// XP earned toward next level, below `XP_PER_LEVEL` between calls
    pub experience: u32,
}

impl Default for PlayerProgression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
        }
    }
}

impl PlayerProgression {
    /// Create new progression at level 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Add XP. Returns the new level if a level was gained.
    ///
    /// At most one level is gained per call, even when the total would cover
    /// several; the surplus carries over. At `u32::MAX` the level is capped
    /// and experience keeps accumulating.
    pub fn add_xp(&mut self, amount: u32) -> Option<u32> {
        self.experience = self.experience.saturating_add(amount);
        if self.experience < XP_PER_LEVEL || self.level == u32::MAX {
            return None;
        }
        self.experience -= XP_PER_LEVEL;
        self.level += 1;
        Some(self.level)
    }
}

/// Calculate XP reward for defeating a creature
pub fn xp_for_creature(creature_attack: u32) -> u32 {
    creature_attack.saturating_mul(XP_PER_CREATURE_ATTACK)
}
