/// Star system the player is assigned to patrol.
///
/// The choice is flavour only; it does not change the encounter.
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
pub enum PatrolSystem {
    Orion,
    Deneb,
    Arcturus,
}

impl PatrolSystem {
    pub const ALL: [Self; 3] = [Self::Orion, Self::Deneb, Self::Arcturus];

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Orion => "Orion",
            Self::Deneb => "Deneb",
            Self::Arcturus => "Arcturus",
        }
    }
}
