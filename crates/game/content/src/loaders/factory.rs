//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use game_core::{Catalog, GameConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, EnemyLoader, EnemyRoster, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── catalog.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load ship, weapon and system tables from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        CatalogLoader::load(&self.data_dir.join("catalog.ron"))
    }

    /// Load the enemy roster from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<EnemyRoster> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_complete_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "player_health = 40\noffer_instructions = false\nenemy = \"raider\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("catalog.ron"),
            include_str!("../../data/catalog.ron"),
        )
        .unwrap();
        fs::write(
            dir.path().join("enemies.ron"),
            r#"[("raider", (name: "Raider", health: 20, protection: 1, attack: 6))]"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        assert_eq!(config.player_health, 40);
        assert!(!config.offer_instructions);

        let roster = factory.load_enemies().unwrap();
        assert_eq!(roster.require(&config.enemy).unwrap().attack, 6);
        assert_eq!(factory.load_catalog().unwrap(), Catalog::standard());
    }

    #[test]
    fn missing_files_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("catalog.ron"));
    }
}
