//! Damage calculation and application.

/// Damage dealt by one attack.
///
/// # Formula
///
/// ```text
/// damage = max(0, offense - protection)
/// ```
pub const fn calculate_damage(offense: u32, protection: u32) -> u32 {
    offense.saturating_sub(protection)
}

/// Apply damage to current health, clamped to 0.
pub const fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}
