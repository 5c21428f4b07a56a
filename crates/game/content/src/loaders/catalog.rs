//! Ship, weapon and patrol system tables loader.

use std::path::Path;

use game_core::{Catalog, PatrolSystem, ShipClass, WeaponType};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const BUILTIN: &str = include_str!("../../data/catalog.ron");

/// Catalog structure for RON files. Lists are in menu order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub ships: Vec<ShipClass>,
    pub weapons: Vec<WeaponType>,
    pub systems: Vec<PatrolSystem>,
}

/// Loader for the reference tables from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let catalog = Catalog::new(&file.ships, &file.weapons, &file.systems)
            .map_err(|e| anyhow::anyhow!("Invalid catalog: {}", e))?;

        tracing::debug!(
            ships = catalog.ship_classes().len(),
            weapons = catalog.weapon_types().len(),
            systems = catalog.patrol_systems().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Catalog shipped with the crate.
    pub fn builtin() -> LoadResult<Catalog> {
        Self::parse(BUILTIN)
    }
}
