//! Damage calculation
//!
//! Both sides of a fight use the same flat rule: attack minus defense,
//! floored at zero. A blow that cannot get through defense does nothing.

/// Damage dealt by `attack` against `defense`
pub fn calculate_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense)
}
