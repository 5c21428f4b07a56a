//! Cross-frontend primitives for presenting the game.
//!
//! Houses the console boundary, the controller that drives a
//! [`game_core::GameSession`] against it, event formatting and message
//! logging that both the CLI and future graphical clients can reuse.
pub mod config;
pub mod console;
pub mod controller;
pub mod format;
pub mod frontend;
pub mod message;

pub use config::{FrontendConfig, MessageConfig};
pub use console::{Console, ScriptedConsole};
pub use controller::{ControllerError, GameController};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
