//! Deterministic rules of DEEPSPACE shared by every client.
//!
//! `game-core` defines the reference tables ([`catalog`]), the cargo-bounded
//! weapon selection ([`loadout`]), the turn-based damage exchange ([`combat`])
//! and the question-and-answer flow tying them together ([`session`]). It
//! performs no I/O; frontends feed it tokens and render the events it returns.
pub mod catalog;
pub mod combat;
pub mod config;
pub mod error;
pub mod loadout;
pub mod session;

pub use catalog::{
    Catalog, CatalogError, PatrolSystem, ShipClass, ShipKind, WeaponChoice, WeaponKind, WeaponType,
};
pub use combat::{
    BattleReport, CombatEngine, CombatError, CombatOutcome, CombatPhase, CombatantState,
    EnemyProfile, Side, TurnEvent,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use loadout::{
    BuilderPhase, LoadReceipt, Loadout, LoadoutBuilder, LoadoutEntry, LoadoutError,
    WeaponSelection,
};
pub use session::{GameSession, Prompt, SessionError, SessionEvent, SessionPhase};
