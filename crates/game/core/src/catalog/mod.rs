//! Static reference data: ship classes, weapon types and patrol systems.
//!
//! Every table is exposed in menu order and addressed by a stable 1-based
//! selection number, matching the numbers printed to the player. The weapon
//! menu reserves one extra number (`weapon_count + 1`) for "done with
//! selection".

mod ship;
mod system;
mod weapon;

pub use ship::{ShipClass, ShipKind};
pub use system::PatrolSystem;
pub use weapon::{WeaponChoice, WeaponKind, WeaponType};

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

type ShipTable = ArrayVec<ShipClass, { GameConfig::MAX_SHIP_CLASSES }>;
type WeaponTable = ArrayVec<WeaponType, { GameConfig::MAX_WEAPON_TYPES }>;
type SystemTable = ArrayVec<PatrolSystem, { GameConfig::MAX_PATROL_SYSTEMS }>;

/// Errors raised while assembling a catalog from data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog must define at least one {table}")]
    Empty { table: &'static str },

    #[error("too many {table} entries (max: {max}, got: {got})")]
    TooMany {
        table: &'static str,
        max: usize,
        got: usize,
    },

    #[error("ship class {0} is defined more than once")]
    DuplicateShip(ShipKind),

    #[error("weapon type {0} is defined more than once")]
    DuplicateWeapon(WeaponKind),

    #[error("patrol system {0} is defined more than once")]
    DuplicateSystem(PatrolSystem),

    #[error("ship class {0} has no cargo capacity")]
    NoCargoCapacity(ShipKind),

    #[error("weapon type {0} has zero cargo cost")]
    ZeroCargoCost(WeaponKind),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            Empty { .. } => "CATALOG_EMPTY",
            TooMany { .. } => "CATALOG_TOO_MANY",
            DuplicateShip(_) => "CATALOG_DUPLICATE_SHIP",
            DuplicateWeapon(_) => "CATALOG_DUPLICATE_WEAPON",
            DuplicateSystem(_) => "CATALOG_DUPLICATE_SYSTEM",
            NoCargoCapacity(_) => "CATALOG_NO_CARGO_CAPACITY",
            ZeroCargoCost(_) => "CATALOG_ZERO_CARGO_COST",
        }
    }
}

/// Ordered lookup tables for every menu the player chooses from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    ships: ShipTable,
    weapons: WeaponTable,
    systems: SystemTable,
}

impl Catalog {
    /// Builds a catalog from data, validating table sizes and uniqueness.
    pub fn new(
        ships: &[ShipClass],
        weapons: &[WeaponType],
        systems: &[PatrolSystem],
    ) -> Result<Self, CatalogError> {
        let ships: ShipTable = collect_table("ship class", ships)?;
        let weapons: WeaponTable = collect_table("weapon type", weapons)?;
        let systems: SystemTable = collect_table("patrol system", systems)?;

        for (i, ship) in ships.iter().enumerate() {
            if ship.cargo_capacity == 0 {
                return Err(CatalogError::NoCargoCapacity(ship.kind));
            }
            if ships[..i].iter().any(|other| other.kind == ship.kind) {
                return Err(CatalogError::DuplicateShip(ship.kind));
            }
        }

        for (i, weapon) in weapons.iter().enumerate() {
            if weapon.cargo_cost == 0 {
                return Err(CatalogError::ZeroCargoCost(weapon.kind));
            }
            if weapons[..i].iter().any(|other| other.kind == weapon.kind) {
                return Err(CatalogError::DuplicateWeapon(weapon.kind));
            }
        }

        for (i, system) in systems.iter().enumerate() {
            if systems[..i].contains(system) {
                return Err(CatalogError::DuplicateSystem(*system));
            }
        }

        Ok(Self {
            ships,
            weapons,
            systems,
        })
    }

    /// The fixed tables of the classic game.
    pub fn standard() -> Self {
        Self {
            ships: [ShipClass::SCOUT, ShipClass::CRUISER, ShipClass::BATTLESHIP]
                .into_iter()
                .collect(),
            weapons: [
                WeaponType::PHASER_BANKS,
                WeaponType::ANTI_MATTER_MISSILE,
                WeaponType::HYPERSPACE_LANCE,
                WeaponType::PHOTON_TORPEDO,
            ]
            .into_iter()
            .collect(),
            systems: PatrolSystem::ALL.into_iter().collect(),
        }
    }

    pub fn ship_classes(&self) -> &[ShipClass] {
        &self.ships
    }

    pub fn weapon_types(&self) -> &[WeaponType] {
        &self.weapons
    }

    pub fn patrol_systems(&self) -> &[PatrolSystem] {
        &self.systems
    }

    /// Looks up a ship by its 1-based menu number.
    pub fn ship(&self, selection: usize) -> Option<&ShipClass> {
        self.ships.get(selection.checked_sub(1)?)
    }

    /// Looks up a weapon by its 1-based menu number. The "done" entry is not a weapon.
    pub fn weapon(&self, selection: usize) -> Option<&WeaponType> {
        self.weapons.get(selection.checked_sub(1)?)
    }

    pub fn patrol_system(&self, selection: usize) -> Option<PatrolSystem> {
        self.systems.get(selection.checked_sub(1)?).copied()
    }

    /// Menu number reserved for "done with selection".
    pub fn done_selection(&self) -> usize {
        self.weapons.len() + 1
    }

    /// Resolves a weapon menu number, including the reserved "done" entry.
    pub fn resolve_weapon(&self, selection: usize) -> Option<WeaponChoice> {
        if selection == self.done_selection() {
            return Some(WeaponChoice::Done);
        }
        self.weapon(selection).copied().map(WeaponChoice::Weapon)
    }

    /// Returns the 1-based menu number of a weapon kind, if listed.
    pub fn weapon_selection(&self, kind: WeaponKind) -> Option<usize> {
        self.weapons
            .iter()
            .position(|weapon| weapon.kind == kind)
            .map(|index| index + 1)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn collect_table<T: Copy, const N: usize>(
    table: &'static str,
    items: &[T],
) -> Result<ArrayVec<T, N>, CatalogError> {
    if items.is_empty() {
        return Err(CatalogError::Empty { table });
    }
    if items.len() > N {
        return Err(CatalogError::TooMany {
            table,
            max: N,
            got: items.len(),
        });
    }
    Ok(items.iter().copied().collect())
}
