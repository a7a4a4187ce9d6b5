/// Which side of the bout a fighter plays.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    #[strum(serialize = "p1")]
    #[cfg_attr(feature = "serde", serde(rename = "p1"))]
    One,
    #[strum(serialize = "p2")]
    #[cfg_attr(feature = "serde", serde(rename = "p2"))]
    Two,
}

impl Slot {
    /// Numeric id, 1 or 2.
    pub const fn id(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}
