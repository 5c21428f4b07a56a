//! Helpers for assembling the content a game session is played with.
use std::path::PathBuf;

use anyhow::{Context, Result};
use game_content::{CatalogLoader, ConfigLoader, ContentFactory, EnemyLoader, EnemyRoster};
use game_core::{Catalog, EnemyProfile, GameConfig};

/// Everything a [`game_core::GameSession`] needs besides player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub catalog: Catalog,
    pub config: GameConfig,
    pub enemy: EnemyProfile,
}

impl ContentBundle {
    fn assemble(catalog: Catalog, config: GameConfig, roster: &EnemyRoster) -> Result<Self> {
        let enemy = roster.require(&config.enemy)?.clone();
        tracing::info!(enemy = %enemy.name, player_health = config.player_health, "content assembled");
        Ok(Self {
            catalog,
            config,
            enemy,
        })
    }
}

pub trait ContentSource {
    fn load(&self) -> Result<ContentBundle>;
}

/// Content embedded in `game-content` at compile time.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn load(&self) -> Result<ContentBundle> {
        let catalog = CatalogLoader::builtin().context("built-in catalog")?;
        let config = ConfigLoader::builtin().context("built-in config")?;
        let roster = EnemyLoader::builtin().context("built-in enemy roster")?;
        ContentBundle::assemble(catalog, config, &roster)
    }
}

/// Content loaded from RON/TOML files in a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── enemies.ron
/// ```
#[derive(Clone, Debug)]
pub struct DirectoryContent {
    data_dir: PathBuf,
}

impl DirectoryContent {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl ContentSource for DirectoryContent {
    fn load(&self) -> Result<ContentBundle> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Content data directory not found: {} (set CONTENT_DATA_DIR to override)",
                self.data_dir.display()
            );
        }

        let factory = ContentFactory::new(&self.data_dir);
        let dir = self.data_dir.display();

        let config = factory
            .load_config()
            .with_context(|| format!("Failed to load config.toml from {dir}"))?;
        let catalog = factory
            .load_catalog()
            .with_context(|| format!("Failed to load catalog.ron from {dir}"))?;
        let roster = factory
            .load_enemies()
            .with_context(|| format!("Failed to load enemies.ron from {dir}"))?;

        ContentBundle::assemble(catalog, config, &roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builtin_content_is_the_classic_game() {
        let bundle = BuiltinContent.load().unwrap();
        assert_eq!(bundle.catalog, Catalog::standard());
        assert_eq!(bundle.config, GameConfig::default());
        assert_eq!(bundle.enemy, EnemyProfile::alien_destroyer());
    }

    #[test]
    fn directory_content_resolves_the_configured_enemy() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "enemy = \"raider\"\n").unwrap();
        fs::write(
            dir.path().join("catalog.ron"),
            "(ships: [(kind: Scout, speed: 10, cargo_capacity: 16, protection: 1)], \
             weapons: [(kind: PhotonTorpedo, cargo_cost: 2, strength: 10)], \
             systems: [Orion])",
        )
        .unwrap();
        fs::write(
            dir.path().join("enemies.ron"),
            r#"[("raider", (name: "Raider", health: 20, protection: 1, attack: 6))]"#,
        )
        .unwrap();

        let bundle = DirectoryContent::new(dir.path()).load().unwrap();
        assert_eq!(bundle.enemy.name, "Raider");
        assert_eq!(bundle.catalog.done_selection(), 2);
    }

    #[test]
    fn unknown_enemy_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "enemy = \"ghost\"\n").unwrap();
        fs::write(
            dir.path().join("catalog.ron"),
            "(ships: [(kind: Scout, speed: 10, cargo_capacity: 16, protection: 1)], \
             weapons: [(kind: PhotonTorpedo, cargo_cost: 2, strength: 10)], \
             systems: [Orion])",
        )
        .unwrap();
        fs::write(dir.path().join("enemies.ron"), "[]").unwrap();

        let err = DirectoryContent::new(dir.path()).load().unwrap_err();
        assert!(err.to_string().contains("Unknown enemy 'ghost'"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let err = DirectoryContent::new("/definitely/not/here").load().unwrap_err();
        assert!(err.to_string().contains("Content data directory not found"));
    }
}
