//! Trait describing a runnable client front-end.
use anyhow::Result;
use game_core::GameSession;

/// Frontend abstraction for UI layers.
///
/// A frontend owns all player-facing I/O. It receives a fresh session and
/// plays it to completion; the session keeps the battle report afterwards.
///
/// # Implementations
///
/// - `CliFrontend`: line-based terminal UI (crossterm colours)
pub trait Frontend {
    /// Run the game loop until the session is finished or input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    fn run(&mut self, session: &mut GameSession<'_>) -> Result<()>;
}
