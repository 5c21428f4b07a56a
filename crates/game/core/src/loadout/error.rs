//! Loadout selection errors.

use crate::catalog::WeaponKind;
use crate::error::{ErrorSeverity, GameError};

use super::BuilderPhase;

/// Errors produced while assembling a loadout.
///
/// Every variant leaves the builder exactly as it was before the failed call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutError {
    /// Input does not map to a catalog entry (or the quantity is not positive).
    #[error("invalid selection: {input}")]
    InvalidSelection { input: String },

    /// Weapon type is already part of the loadout.
    #[error("{weapon} is already loaded")]
    DuplicateWeapon { weapon: WeaponKind },

    /// Requested units do not fit in the remaining cargo space.
    #[error("{weapon} x{quantity} needs {required} cargo units, {remaining} remaining")]
    InsufficientCargo {
        weapon: WeaponKind,
        quantity: i64,
        /// Saturates at `u64::MAX` for absurd quantities.
        required: u64,
        remaining: u32,
    },

    /// Finalize requested before a ship was chosen.
    #[error("cannot finalize a loadout before a ship is selected")]
    Incomplete,

    /// Operation is not valid in the builder's current phase.
    #[error("operation not valid while {phase}")]
    OutOfPhase { phase: BuilderPhase },
}

impl LoadoutError {
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidSelection {
            input: input.into(),
        }
    }
}

impl GameError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        use LoadoutError::*;
        match self {
            InvalidSelection { .. } | DuplicateWeapon { .. } | InsufficientCargo { .. } => {
                ErrorSeverity::Recoverable
            }
            Incomplete | OutOfPhase { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use LoadoutError::*;
        match self {
            InvalidSelection { .. } => "LOADOUT_INVALID_SELECTION",
            DuplicateWeapon { .. } => "LOADOUT_DUPLICATE_WEAPON",
            InsufficientCargo { .. } => "LOADOUT_INSUFFICIENT_CARGO",
            Incomplete => "LOADOUT_INCOMPLETE",
            OutOfPhase { .. } => "LOADOUT_OUT_OF_PHASE",
        }
    }
}
