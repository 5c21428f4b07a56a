//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and content assembly that can be reused by
//! the CLI or any other front-end crate.
pub mod builder;
pub mod config;
pub mod content;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::SessionConfig;
pub use content::{BuiltinContent, ContentBundle, ContentSource, DirectoryContent};
