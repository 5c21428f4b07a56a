//! Loadout assembly.
//!
//! A [`Loadout`] is the set of weapons assigned to one ship for one battle. It
//! is only ever mutated through [`LoadoutBuilder`], which enforces two
//! invariants on every accepted request:
//!
//! - each weapon type appears at most once
//! - `Σ quantity × cargo_cost ≤ ship.cargo_capacity`

mod builder;
mod error;

pub use builder::{BuilderPhase, LoadReceipt, LoadoutBuilder, WeaponSelection};
pub use error::LoadoutError;

use arrayvec::ArrayVec;

use crate::catalog::{ShipClass, WeaponKind, WeaponType};
use crate::config::GameConfig;

/// A weapon type together with the number of units loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadoutEntry {
    pub weapon: WeaponType,
    pub quantity: u32,
}

impl LoadoutEntry {
    pub const fn new(weapon: WeaponType, quantity: u32) -> Self {
        Self { weapon, quantity }
    }

    /// Cargo units occupied by this entry.
    pub const fn cargo(&self) -> u32 {
        self.weapon.cargo_cost.saturating_mul(self.quantity)
    }

    /// Damage points this entry adds to the ship's offense.
    pub const fn offense(&self) -> u32 {
        self.weapon.strength.saturating_mul(self.quantity)
    }
}

/// Weapons assigned to a ship, in the order they were selected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    ship: ShipClass,
    entries: ArrayVec<LoadoutEntry, { GameConfig::MAX_WEAPON_TYPES }>,
}

impl Loadout {
    pub(crate) fn empty(ship: ShipClass) -> Self {
        Self {
            ship,
            entries: ArrayVec::new(),
        }
    }

    /// Appends an entry. The builder checks capacity and uniqueness first.
    pub(crate) fn push(&mut self, entry: LoadoutEntry) {
        debug_assert!(!self.contains(entry.weapon.kind));
        debug_assert!(entry.cargo() <= self.remaining_cargo());
        self.entries.push(entry);
    }

    pub fn ship(&self) -> &ShipClass {
        &self.ship
    }

    pub fn entries(&self) -> &[LoadoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, kind: WeaponKind) -> bool {
        self.entries.iter().any(|entry| entry.weapon.kind == kind)
    }

    pub fn cargo_used(&self) -> u32 {
        self.entries
            .iter()
            .map(LoadoutEntry::cargo)
            .fold(0, u32::saturating_add)
    }

    pub fn remaining_cargo(&self) -> u32 {
        self.ship.cargo_capacity.saturating_sub(self.cargo_used())
    }

    /// Total damage per attack: `Σ strength × quantity`.
    pub fn offense(&self) -> u32 {
        self.entries
            .iter()
            .map(LoadoutEntry::offense)
            .fold(0, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_follow_entries() {
        let mut loadout = Loadout::empty(ShipClass::CRUISER);
        assert!(loadout.is_empty());
        assert_eq!(loadout.remaining_cargo(), 24);
        assert_eq!(loadout.offense(), 0);

        loadout.push(LoadoutEntry::new(WeaponType::PHASER_BANKS, 1));
        loadout.push(LoadoutEntry::new(WeaponType::PHOTON_TORPEDO, 3));

        assert_eq!(loadout.len(), 2);
        assert_eq!(loadout.cargo_used(), 12 + 6);
        assert_eq!(loadout.remaining_cargo(), 6);
        assert_eq!(loadout.offense(), 4 + 30);
        assert!(loadout.contains(WeaponKind::PhotonTorpedo));
        assert!(!loadout.contains(WeaponKind::HyperspaceLance));
    }

    #[test]
    fn oversized_entries_saturate_instead_of_overflowing() {
        let entry = LoadoutEntry::new(WeaponType::PHASER_BANKS, u32::MAX);
        assert_eq!(entry.cargo(), u32::MAX);
        assert_eq!(entry.offense(), u32::MAX);
    }
}
