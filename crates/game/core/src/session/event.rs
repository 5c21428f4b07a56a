use crate::catalog::{PatrolSystem, ShipClass, WeaponType};
use crate::combat::{CombatError, CombatOutcome, TurnEvent};
use crate::loadout::{LoadReceipt, Loadout, LoadoutError};

/// Decision the session is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Yes/no: show the instructions.
    Instructions,
    /// Yes/no: show the maneuver chart.
    ManeuverChart,
    /// System number, `1..=count`.
    PatrolSystem { count: usize },
    /// Ship number, `1..=count`.
    Ship { count: usize },
    /// Weapon number; `done` is the reserved "done with selection" entry.
    Weapon { done: usize },
    /// Units of an already chosen weapon.
    Quantity { weapon: WeaponType },
}

/// Something the player should be told, in order of occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Intro,
    InstructionsShown,
    ManeuverChartShown,
    SystemMenu,
    PatrolSystemSelected(PatrolSystem),
    ShipSelected { selection: usize, ship: ShipClass },
    WeaponMenu { remaining: u32 },
    WeaponLoaded(LoadReceipt),
    CargoFull,
    SelectionComplete,
    /// Input was not accepted; the same decision is asked again.
    Rejected(LoadoutError),
    BattleStarted { loadout: Loadout },
    Turn(TurnEvent),
    /// Neither side can hurt the other; the battle is called off.
    Stalemate(CombatError),
    BattleEnded(CombatOutcome),
}

impl SessionEvent {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
