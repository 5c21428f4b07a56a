//! Data-driven content definitions and loaders.
//!
//! This crate houses the shipped game content and provides loaders for RON/TOML data files:
//! - Ship, weapon and patrol system tables (`catalog.ron`)
//! - Enemy roster (`enemies.ron`)
//! - Game configuration (`config.toml`)
//!
//! The same files are embedded at compile time so a client always has a
//! working default when no data directory is configured.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, EnemyLoader, EnemyRoster};
