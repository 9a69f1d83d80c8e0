//! Enemy creatures: the fixed roster of kinds and their presets

pub mod creature;

pub use creature::Creature;

use serde::{Deserialize, Serialize};

/// Threat tier of a creature kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Lesser,
    Medium,
    Greater,
}

/// Base numbers a creature of a given kind spawns with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreaturePreset {
    pub hit_points: u32,
    pub attack: u32,
    pub defense: u32,
}

/// Every creature that can be fought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    ForestGoblin,
    UndeadWarrior,
    AncientDragon,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 3] = [
        CreatureKind::ForestGoblin,
        CreatureKind::UndeadWarrior,
        CreatureKind::AncientDragon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CreatureKind::ForestGoblin => "Forest Goblin",
            CreatureKind::UndeadWarrior => "Undead Warrior",
            CreatureKind::AncientDragon => "Ancient Dragon",
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            CreatureKind::ForestGoblin => Tier::Lesser,
            CreatureKind::UndeadWarrior => Tier::Medium,
            CreatureKind::AncientDragon => Tier::Greater,
        }
    }

    pub fn preset(&self) -> CreaturePreset {
        let (hit_points, attack, defense) = match self {
            CreatureKind::ForestGoblin => (30, 8, 3),
            CreatureKind::UndeadWarrior => (40, 10, 5),
            CreatureKind::AncientDragon => (100, 20, 10),
        };
        CreaturePreset {
            hit_points,
            attack,
            defense,
        }
    }

    /// How this kind's attack reads in the combat log
    pub fn announcement(&self) -> &'static str {
        match self {
            CreatureKind::ForestGoblin => "swings its club",
            CreatureKind::UndeadWarrior => "slashes with a rusty sword",
            CreatureKind::AncientDragon => "breathes fire",
        }
    }

    /// Pick a kind uniformly at random
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}
