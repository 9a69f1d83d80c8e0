//! Player character, stats, and progression

pub mod character;
pub mod stats;

pub use character::{Character, CharacterStatus};
pub use stats::{
    xp_for_creature, CharacterStats, PlayerProgression, StartingStats, StatGrowth, XP_PER_LEVEL,
};
