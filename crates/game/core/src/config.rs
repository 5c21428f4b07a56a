use std::borrow::Cow;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Hull points the player's ship starts every battle with.
    pub player_health: u32,

    /// Whether the session opens with the instructions and maneuver chart prompts.
    pub offer_instructions: bool,

    /// Roster identifier of the enemy the player engages.
    pub enemy: Cow<'static, str>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_SHIP_CLASSES: usize = 8;
    /// Also bounds the number of entries a loadout can hold (one per weapon type).
    pub const MAX_WEAPON_TYPES: usize = 8;
    pub const MAX_PATROL_SYSTEMS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_HEALTH: u32 = 30;
    pub const DEFAULT_ENEMY: &'static str = "alien_destroyer";

    pub fn new() -> Self {
        Self {
            player_health: Self::DEFAULT_PLAYER_HEALTH,
            offer_instructions: true,
            enemy: Cow::Borrowed(Self::DEFAULT_ENEMY),
        }
    }

    pub fn with_player_health(player_health: u32) -> Self {
        Self {
            player_health,
            ..Self::new()
        }
    }

    /// Skips the instructions and maneuver chart prompts.
    #[must_use]
    pub fn without_instructions(mut self) -> Self {
        self.offer_instructions = false;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
