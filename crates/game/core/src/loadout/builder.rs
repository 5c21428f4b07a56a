//! Selection state machine: `AwaitingShip → SelectingWeapons → Finalized`.

use crate::catalog::{Catalog, ShipClass, WeaponChoice, WeaponType};

use super::{Loadout, LoadoutEntry, LoadoutError};

/// Observable phase of a [`LoadoutBuilder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuilderPhase {
    #[strum(to_string = "awaiting ship")]
    AwaitingShip,
    #[strum(to_string = "selecting weapons")]
    SelectingWeapons,
    #[strum(to_string = "finalized")]
    Finalized,
}

/// Accepted weapon request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReceipt {
    pub entry: LoadoutEntry,
    /// Cargo units left after loading the entry.
    pub remaining: u32,
    /// Set when the entry used up the last cargo unit and the builder froze.
    pub finalized: bool,
}

/// Outcome of [`LoadoutBuilder::select_weapon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponSelection {
    Loaded(LoadReceipt),
    /// The "done" entry was chosen; the loadout is now frozen.
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum BuilderState {
    AwaitingShip,
    SelectingWeapons(Loadout),
    Finalized(Loadout),
}

/// Assembles a [`Loadout`] from menu selections against a [`Catalog`].
///
/// Failed requests never change the builder; the caller re-prompts and tries again.
#[derive(Clone, Debug)]
pub struct LoadoutBuilder<'c> {
    catalog: &'c Catalog,
    state: BuilderState,
}

impl<'c> LoadoutBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: BuilderState::AwaitingShip,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn phase(&self) -> BuilderPhase {
        match self.state {
            BuilderState::AwaitingShip => BuilderPhase::AwaitingShip,
            BuilderState::SelectingWeapons(_) => BuilderPhase::SelectingWeapons,
            BuilderState::Finalized(_) => BuilderPhase::Finalized,
        }
    }

    /// Loadout in progress or frozen; `None` until a ship is chosen.
    pub fn loadout(&self) -> Option<&Loadout> {
        match &self.state {
            BuilderState::AwaitingShip => None,
            BuilderState::SelectingWeapons(loadout) | BuilderState::Finalized(loadout) => {
                Some(loadout)
            }
        }
    }

    pub fn ship(&self) -> Option<&ShipClass> {
        self.loadout().map(Loadout::ship)
    }

    pub fn entries(&self) -> &[LoadoutEntry] {
        self.loadout().map(Loadout::entries).unwrap_or_default()
    }

    pub fn remaining_cargo(&self) -> Option<u32> {
        self.loadout().map(Loadout::remaining_cargo)
    }

    /// Chooses the ship by its 1-based menu number and opens an empty loadout.
    pub fn select_ship(&mut self, selection: usize) -> Result<ShipClass, LoadoutError> {
        if !matches!(self.state, BuilderState::AwaitingShip) {
            return Err(LoadoutError::OutOfPhase {
                phase: self.phase(),
            });
        }

        let ship = *self
            .catalog
            .ship(selection)
            .ok_or_else(|| LoadoutError::invalid(selection.to_string()))?;

        tracing::debug!(ship = %ship.kind, cargo = ship.cargo_capacity, "ship selected");
        self.state = BuilderState::SelectingWeapons(Loadout::empty(ship));
        Ok(ship)
    }

    /// Validates a weapon menu number before a quantity is requested.
    ///
    /// Rejects unknown numbers and weapons already loaded; does not change state.
    pub fn check_weapon(&self, selection: usize) -> Result<WeaponChoice, LoadoutError> {
        let loadout = self.selecting()?;
        let choice = self
            .catalog
            .resolve_weapon(selection)
            .ok_or_else(|| LoadoutError::invalid(selection.to_string()))?;

        if let WeaponChoice::Weapon(weapon) = choice
            && loadout.contains(weapon.kind)
        {
            return Err(LoadoutError::DuplicateWeapon {
                weapon: weapon.kind,
            });
        }

        Ok(choice)
    }

    /// Loads `quantity` units of the weapon at `selection`.
    ///
    /// Choosing the reserved "done" number freezes the loadout instead. When an
    /// accepted request uses the last cargo unit the builder freezes as well.
    pub fn select_weapon(
        &mut self,
        selection: usize,
        quantity: i64,
    ) -> Result<WeaponSelection, LoadoutError> {
        let weapon = match self.check_weapon(selection)? {
            WeaponChoice::Done => {
                self.freeze();
                return Ok(WeaponSelection::Completed);
            }
            WeaponChoice::Weapon(weapon) => weapon,
        };

        if quantity <= 0 {
            return Err(LoadoutError::invalid(format!("quantity {quantity}")));
        }

        let phase = self.phase();
        let BuilderState::SelectingWeapons(loadout) = &mut self.state else {
            return Err(LoadoutError::OutOfPhase { phase });
        };
        let entry = fit_entry(weapon, quantity, loadout.remaining_cargo())?;
        loadout.push(entry);
        let remaining = loadout.remaining_cargo();

        tracing::debug!(
            weapon = %weapon.kind,
            quantity = entry.quantity,
            remaining,
            "weapon loaded"
        );

        let finalized = remaining == 0;
        if finalized {
            self.freeze();
        }

        Ok(WeaponSelection::Loaded(LoadReceipt {
            entry,
            remaining,
            finalized,
        }))
    }

    /// Explicit "selection complete" signal from the player.
    pub fn complete(&mut self) -> Result<&Loadout, LoadoutError> {
        self.finalize()
    }

    /// Freezes and returns the loadout. Idempotent once finalized.
    pub fn finalize(&mut self) -> Result<&Loadout, LoadoutError> {
        if matches!(self.state, BuilderState::AwaitingShip) {
            return Err(LoadoutError::Incomplete);
        }
        self.freeze();
        match &self.state {
            BuilderState::Finalized(loadout) => Ok(loadout),
            _ => Err(LoadoutError::Incomplete),
        }
    }

    /// Consumes the builder, yielding the loadout if it was finalized.
    pub fn into_loadout(self) -> Option<Loadout> {
        match self.state {
            BuilderState::Finalized(loadout) => Some(loadout),
            _ => None,
        }
    }

    fn selecting(&self) -> Result<&Loadout, LoadoutError> {
        match &self.state {
            BuilderState::SelectingWeapons(loadout) => Ok(loadout),
            _ => Err(LoadoutError::OutOfPhase {
                phase: self.phase(),
            }),
        }
    }

    fn freeze(&mut self) {
        let state = std::mem::replace(&mut self.state, BuilderState::AwaitingShip);
        self.state = match state {
            BuilderState::SelectingWeapons(loadout) => {
                tracing::info!(
                    ship = %loadout.ship().kind,
                    entries = loadout.len(),
                    offense = loadout.offense(),
                    "loadout finalized"
                );
                BuilderState::Finalized(loadout)
            }
            other => other,
        };
    }
}

/// Builds the entry if `quantity` units fit into `remaining` cargo units.
fn fit_entry(weapon: WeaponType, quantity: i64, remaining: u32) -> Result<LoadoutEntry, LoadoutError> {
    let insufficient = |required: u64| LoadoutError::InsufficientCargo {
        weapon: weapon.kind,
        quantity,
        required,
        remaining,
    };

    let required = u64::try_from(quantity)
        .map_or(u64::MAX, |units| units.saturating_mul(u64::from(weapon.cargo_cost)));
    let units = u32::try_from(quantity).map_err(|_| insufficient(required))?;
    match weapon.cargo_for(units) {
        Some(cargo) if cargo <= remaining => Ok(LoadoutEntry::new(weapon, units)),
        _ => Err(insufficient(required)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WeaponKind;
    use crate::error::{ErrorSeverity, GameError};

    const SCOUT: usize = 1;
    const CRUISER: usize = 2;
    const PHASER_BANKS: usize = 1;
    const ANTI_MATTER_MISSILE: usize = 2;
    const PHOTON_TORPEDO: usize = 4;
    const DONE: usize = 5;

    fn assert_invariants(builder: &LoadoutBuilder<'_>) {
        let Some(loadout) = builder.loadout() else {
            return;
        };
        assert!(loadout.cargo_used() <= loadout.ship().cargo_capacity);
        for (i, entry) in loadout.entries().iter().enumerate() {
            assert!(
                loadout.entries()[..i]
                    .iter()
                    .all(|other| other.weapon.kind != entry.weapon.kind)
            );
        }
    }

    #[test]
    fn scout_fills_cargo_and_auto_finalizes() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);
        builder.select_ship(SCOUT).unwrap();

        let first = builder.select_weapon(PHASER_BANKS, 1).unwrap();
        let WeaponSelection::Loaded(receipt) = first else {
            panic!("expected a loaded weapon, got {first:?}");
        };
        assert_eq!(receipt.remaining, 4);
        assert!(!receipt.finalized);
        assert_eq!(builder.phase(), BuilderPhase::SelectingWeapons);

        let second = builder.select_weapon(ANTI_MATTER_MISSILE, 1).unwrap();
        let WeaponSelection::Loaded(receipt) = second else {
            panic!("expected a loaded weapon, got {second:?}");
        };
        assert_eq!(receipt.remaining, 0);
        assert!(receipt.finalized);
        assert_eq!(builder.phase(), BuilderPhase::Finalized);

        let loadout = builder.finalize().unwrap();
        assert_eq!(loadout.len(), 2);
        assert_eq!(loadout.offense(), 4 + 20);
        assert_invariants(&builder);
    }

    #[test]
    fn repeated_weapon_is_rejected_not_merged() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);
        builder.select_ship(CRUISER).unwrap();
        builder.select_weapon(PHASER_BANKS, 1).unwrap();

        let err = builder.select_weapon(PHASER_BANKS, 1).unwrap_err();
        assert_eq!(
            err,
            LoadoutError::DuplicateWeapon {
                weapon: WeaponKind::PhaserBanks
            }
        );
        assert_eq!(err.error_code(), "LOADOUT_DUPLICATE_WEAPON");
        assert_eq!(builder.entries().len(), 1);
        assert_eq!(builder.remaining_cargo(), Some(12));

        assert_eq!(
            builder.check_weapon(PHASER_BANKS),
            Err(LoadoutError::DuplicateWeapon {
                weapon: WeaponKind::PhaserBanks
            })
        );
        assert_invariants(&builder);
    }

    #[test]
    fn oversized_request_leaves_loadout_untouched() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);
        builder.select_ship(SCOUT).unwrap();

        let err = builder.select_weapon(ANTI_MATTER_MISSILE, 5).unwrap_err();
        assert_eq!(
            err,
            LoadoutError::InsufficientCargo {
                weapon: WeaponKind::AntiMatterMissile,
                quantity: 5,
                required: 20,
                remaining: 16,
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert!(builder.entries().is_empty());
        assert_eq!(builder.remaining_cargo(), Some(16));
        assert_eq!(builder.phase(), BuilderPhase::SelectingWeapons);

        // Another attempt at the same decision still works.
        builder.select_weapon(ANTI_MATTER_MISSILE, 4).unwrap();
        assert_eq!(builder.phase(), BuilderPhase::Finalized);
    }

    #[test]
    fn huge_quantities_report_insufficient_cargo() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);
        builder.select_ship(SCOUT).unwrap();

        let err = builder.select_weapon(PHASER_BANKS, i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            LoadoutError::InsufficientCargo {
                required: u64::MAX,
                ..
            }
        ));

        let err = builder
            .select_weapon(PHASER_BANKS, i64::from(u32::MAX))
            .unwrap_err();
        assert!(matches!(
            err,
            LoadoutError::InsufficientCargo {
                required: 51_539_607_540,
                ..
            }
        ));

        // Above u32::MAX units the exact requirement is still reported.
        let err = builder
            .select_weapon(PHASER_BANKS, 5_000_000_000)
            .unwrap_err();
        assert_eq!(
            err,
            LoadoutError::InsufficientCargo {
                weapon: WeaponKind::PhaserBanks,
                quantity: 5_000_000_000,
                required: 60_000_000_000,
                remaining: 16,
            }
        );
        assert!(builder.entries().is_empty());
    }

    #[test]
    fn non_positive_quantities_and_unknown_numbers_are_invalid() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);

        assert_eq!(
            builder.select_ship(0),
            Err(LoadoutError::invalid("0".to_string()))
        );
        assert_eq!(builder.phase(), BuilderPhase::AwaitingShip);
        builder.select_ship(SCOUT).unwrap();

        for quantity in [0, -3] {
            let err = builder.select_weapon(PHOTON_TORPEDO, quantity).unwrap_err();
            assert_eq!(err.error_code(), "LOADOUT_INVALID_SELECTION");
        }
        let err = builder.select_weapon(DONE + 1, 1).unwrap_err();
        assert_eq!(err.error_code(), "LOADOUT_INVALID_SELECTION");
        assert!(builder.entries().is_empty());
    }

    #[test]
    fn done_entry_and_finalize_converge() {
        let catalog = Catalog::standard();

        let mut by_sentinel = LoadoutBuilder::new(&catalog);
        by_sentinel.select_ship(CRUISER).unwrap();
        by_sentinel.select_weapon(PHOTON_TORPEDO, 2).unwrap();
        assert_eq!(
            by_sentinel.select_weapon(DONE, 0),
            Ok(WeaponSelection::Completed)
        );

        let mut by_signal = LoadoutBuilder::new(&catalog);
        by_signal.select_ship(CRUISER).unwrap();
        by_signal.select_weapon(PHOTON_TORPEDO, 2).unwrap();
        by_signal.complete().unwrap();

        assert_eq!(by_sentinel.phase(), BuilderPhase::Finalized);
        assert_eq!(by_sentinel.finalize(), by_signal.finalize());
    }

    #[test]
    fn finalize_is_idempotent() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);
        builder.select_ship(SCOUT).unwrap();
        builder.select_weapon(PHOTON_TORPEDO, 3).unwrap();

        let first = builder.finalize().unwrap().clone();
        let second = builder.finalize().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(builder.into_loadout(), Some(first));
    }

    #[test]
    fn empty_loadout_is_legal() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);
        builder.select_ship(3).unwrap();

        let loadout = builder.finalize().unwrap();
        assert!(loadout.is_empty());
        assert_eq!(loadout.offense(), 0);
    }

    #[test]
    fn sequencing_errors_are_internal() {
        let catalog = Catalog::standard();
        let mut builder = LoadoutBuilder::new(&catalog);

        let err = builder.finalize().unwrap_err();
        assert_eq!(err, LoadoutError::Incomplete);
        assert!(err.severity().is_internal());

        assert_eq!(
            builder.select_weapon(PHASER_BANKS, 1),
            Err(LoadoutError::OutOfPhase {
                phase: BuilderPhase::AwaitingShip
            })
        );

        builder.select_ship(SCOUT).unwrap();
        assert_eq!(
            builder.select_ship(CRUISER),
            Err(LoadoutError::OutOfPhase {
                phase: BuilderPhase::SelectingWeapons
            })
        );

        builder.complete().unwrap();
        let err = builder.select_weapon(PHOTON_TORPEDO, 1).unwrap_err();
        assert_eq!(err.to_string(), "operation not valid while finalized");
    }
}
