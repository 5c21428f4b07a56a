use crate::error::{ErrorSeverity, GameError};

use super::CombatPhase;

/// Errors raised while resolving a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("battle already ended ({phase})")]
    AlreadyFinished { phase: CombatPhase },

    #[error("battle still running ({phase})")]
    InProgress { phase: CombatPhase },

    /// Neither side can get past the other's protection.
    #[error(
        "stalemate: player offense {player_offense} vs protection {enemy_protection}, \
         enemy attack {enemy_offense} vs protection {player_protection}"
    )]
    Stalemate {
        player_offense: u32,
        enemy_protection: u32,
        enemy_offense: u32,
        player_protection: u32,
    },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyFinished { .. } | Self::InProgress { .. } => ErrorSeverity::Internal,
            Self::Stalemate { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyFinished { .. } => "COMBAT_ALREADY_FINISHED",
            Self::InProgress { .. } => "COMBAT_IN_PROGRESS",
            Self::Stalemate { .. } => "COMBAT_STALEMATE",
        }
    }
}
