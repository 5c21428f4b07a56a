//! Ship classes available to the player.

/// Hull design identifier.
///
/// The string form (`scout`, `cruiser`, `battleship`) is the stable identifier
/// used by data files and logs.
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
pub enum ShipKind {
    /// Fast and lightly armed.
    Scout,
    /// Balanced patrol vessel.
    Cruiser,
    /// Slow, heavily armored, largest cargo hold.
    Battleship,
}

impl ShipKind {
    /// Name shown to the player.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Scout => "Scout",
            Self::Cruiser => "Cruiser",
            Self::Battleship => "Battleship",
        }
    }
}

/// Immutable characteristics of a ship class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipClass {
    pub kind: ShipKind,
    /// Speed relative to the other classes.
    pub speed: u32,
    /// Units of cargo space available for weaponry.
    pub cargo_capacity: u32,
    /// Flat damage reduction applied to every incoming hit.
    pub protection: u32,
}

impl ShipClass {
    pub const fn new(kind: ShipKind, speed: u32, cargo_capacity: u32, protection: u32) -> Self {
        Self {
            kind,
            speed,
            cargo_capacity,
            protection,
        }
    }

    pub const SCOUT: Self = Self::new(ShipKind::Scout, 10, 16, 1);
    pub const CRUISER: Self = Self::new(ShipKind::Cruiser, 4, 24, 2);
    pub const BATTLESHIP: Self = Self::new(ShipKind::Battleship, 2, 30, 5);

    pub const fn name(&self) -> &'static str {
        self.kind.display_name()
    }
}
