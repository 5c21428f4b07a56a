//! Terminal styling.
pub mod theme;

pub use theme::TerminalTheme;
