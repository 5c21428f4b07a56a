//! Enemy roster loader.

use std::path::Path;

use game_core::EnemyProfile;

use crate::loaders::{LoadResult, read_file};

const BUILTIN: &str = include_str!("../../data/enemies.ron");

/// Enemy profiles keyed by roster id, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnemyRoster {
    entries: Vec<(String, EnemyProfile)>,
}

impl EnemyRoster {
    pub fn new(entries: Vec<(String, EnemyProfile)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&EnemyProfile> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, profile)| profile)
    }

    /// Looks up `id`, failing with the list of known ids.
    pub fn require(&self, id: &str) -> LoadResult<&EnemyProfile> {
        self.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.ids().collect();
            anyhow::anyhow!("Unknown enemy '{}' (known: {})", id, known.join(", "))
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loader for the enemy roster from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load the roster from a RON file.
    ///
    /// RON format: `Vec<(String, EnemyProfile)>`
    pub fn load(path: &Path) -> LoadResult<EnemyRoster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EnemyRoster> {
        let entries: Vec<(String, EnemyProfile)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        for (i, (id, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(other, _)| other == id) {
                anyhow::bail!("Enemy '{}' is defined more than once", id);
            }
        }

        Ok(EnemyRoster::new(entries))
    }

    /// Roster shipped with the crate.
    pub fn builtin() -> LoadResult<EnemyRoster> {
        Self::parse(BUILTIN)
    }
}
