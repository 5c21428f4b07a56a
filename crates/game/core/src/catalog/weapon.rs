//! Weapon types that can be loaded into a ship's cargo hold.

/// Weapon identifier.
///
/// The string form (`phaser_banks`, `anti_matter_missile`, ...) is the stable
/// identifier used by data files and logs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponKind {
    PhaserBanks,
    AntiMatterMissile,
    HyperspaceLance,
    PhotonTorpedo,
    /// Not part of the standard catalog; available to data-driven catalogs.
    HyperonNeutralizationField,
}

impl WeaponKind {
    /// Name shown to the player.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::PhaserBanks => "Phaser Banks",
            Self::AntiMatterMissile => "Anti-Matter Missile",
            Self::HyperspaceLance => "Hyperspace Lance",
            Self::PhotonTorpedo => "Photon Torpedo",
            Self::HyperonNeutralizationField => "Hyperon Neutralization Field",
        }
    }
}

/// Immutable characteristics of a weapon type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponType {
    pub kind: WeaponKind,
    /// Cargo units taken by one unit of this weapon.
    pub cargo_cost: u32,
    /// Damage points contributed by one unit of this weapon.
    pub strength: u32,
}

impl WeaponType {
    pub const fn new(kind: WeaponKind, cargo_cost: u32, strength: u32) -> Self {
        Self {
            kind,
            cargo_cost,
            strength,
        }
    }

    pub const PHASER_BANKS: Self = Self::new(WeaponKind::PhaserBanks, 12, 4);
    pub const ANTI_MATTER_MISSILE: Self = Self::new(WeaponKind::AntiMatterMissile, 4, 20);
    pub const HYPERSPACE_LANCE: Self = Self::new(WeaponKind::HyperspaceLance, 4, 16);
    pub const PHOTON_TORPEDO: Self = Self::new(WeaponKind::PhotonTorpedo, 2, 10);
    pub const HYPERON_NEUTRALIZATION_FIELD: Self =
        Self::new(WeaponKind::HyperonNeutralizationField, 20, 6);

    pub const fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Cargo units needed for `quantity` units, or `None` on overflow.
    pub const fn cargo_for(&self, quantity: u32) -> Option<u32> {
        self.cargo_cost.checked_mul(quantity)
    }
}

/// Result of resolving a weapon menu number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponChoice {
    Weapon(WeaponType),
    /// The reserved "done with selection" entry.
    Done,
}
