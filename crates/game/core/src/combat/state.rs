use crate::loadout::Loadout;

/// Which side of the battle an attack came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}

/// Mutable combat numbers of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub health: u32,
    pub protection: u32,
    /// Damage points per attack before the defender's protection is applied.
    pub offense: u32,
}

impl CombatantState {
    pub const fn new(health: u32, protection: u32, offense: u32) -> Self {
        Self {
            health,
            protection,
            offense,
        }
    }

    /// Player side built from a finalized loadout.
    pub fn from_loadout(loadout: &Loadout, health: u32) -> Self {
        Self::new(health, loadout.ship().protection, loadout.offense())
    }

    pub const fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

/// Fixed description of an opponent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyProfile {
    pub name: String,
    pub health: u32,
    pub protection: u32,
    pub attack: u32,
}

impl EnemyProfile {
    pub fn new(name: impl Into<String>, health: u32, protection: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            health,
            protection,
            attack,
        }
    }

    /// The opponent of the classic game.
    pub fn alien_destroyer() -> Self {
        Self::new("Alien Destroyer", 50, 3, 5)
    }

    pub fn combatant(&self) -> CombatantState {
        CombatantState::new(self.health, self.protection, self.attack)
    }
}

impl Default for EnemyProfile {
    fn default() -> Self {
        Self::alien_destroyer()
    }
}
