//! Terminal frontend for DEEPSPACE.
//!
//! Line-oriented: every event becomes one or more printed lines and every
//! prompt reads one line from stdin. It implements
//! [`client_frontend_core::Frontend`] so the client binary can inject it.

mod app;
mod config;
mod console;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use console::TerminalConsole;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
