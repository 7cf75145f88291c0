//! Symbolic die faces and their tally contribution.

use serde::{Deserialize, Serialize};

use super::roll::RollValues;
use crate::error::{FarhomeError, FarhomeResult};

/// The symbol shown on a rolled die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Face {
    /// Two successes and a critical.
    CriticalSuccess,
    /// Two successes.
    DoubleSuccess,
    /// One success.
    Success,
    /// No effect.
    Blank,
    /// Cancels one success.
    Failure,
    /// Cancels two successes.
    DoubleFailure,
    /// Cancels two successes and a critical.
    CriticalFailure,
    /// Cancels one wound.
    Defense,
    /// Cancels two wounds.
    DoubleDefense,
    /// Cancels two wounds and a critical.
    CriticalDefense,
    /// One wound.
    Wound,
}

impl Face {
    /// Every face.
    pub const ALL: [Self; 11] = [
        Self::CriticalSuccess,
        Self::DoubleSuccess,
        Self::Success,
        Self::Blank,
        Self::Failure,
        Self::DoubleFailure,
        Self::CriticalFailure,
        Self::Defense,
        Self::DoubleDefense,
        Self::CriticalDefense,
        Self::Wound,
    ];

    /// The stable string id used in rendered views.
    pub fn id(self) -> &'static str {
        match self {
            Self::CriticalSuccess => "critical-success",
            Self::DoubleSuccess => "double-success",
            Self::Success => "success",
            Self::Blank => "blank",
            Self::Failure => "failure",
            Self::DoubleFailure => "double-failure",
            Self::CriticalFailure => "critical-failure",
            Self::Defense => "defense",
            Self::DoubleDefense => "double-defense",
            Self::CriticalDefense => "critical-defense",
            Self::Wound => "wound",
        }
    }

    /// Resolve a face from its string id.
    pub fn from_id(id: &str) -> FarhomeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|face| face.id() == id)
            .ok_or_else(|| FarhomeError::UnknownFace(id.to_string()))
    }

    /// What this face adds to a roll's tally.
    pub fn tally(self) -> RollValues {
        match self {
            Self::CriticalSuccess => RollValues::new(2, 1, 0),
            Self::DoubleSuccess => RollValues::new(2, 0, 0),
            Self::Success => RollValues::new(1, 0, 0),
            Self::Blank => RollValues::default(),
            Self::Failure => RollValues::new(-1, 0, 0),
            Self::DoubleFailure => RollValues::new(-2, 0, 0),
            Self::CriticalFailure => RollValues::new(-2, -1, 0),
            Self::Defense => RollValues::new(0, 0, -1),
            Self::DoubleDefense => RollValues::new(0, 0, -2),
            Self::CriticalDefense => RollValues::new(0, -1, -2),
            Self::Wound => RollValues::new(0, 0, 1),
        }
    }
}

/// Look up the tally of a face given by id.
pub fn tally_of(id: &str) -> FarhomeResult<RollValues> {
    Face::from_id(id).map(Face::tally)
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CriticalSuccess => "Critical Success",
            Self::DoubleSuccess => "Double Success",
            Self::Success => "Success",
            Self::Blank => "Blank",
            Self::Failure => "Failure",
            Self::DoubleFailure => "Double Failure",
            Self::CriticalFailure => "Critical Failure",
            Self::Defense => "Defense",
            Self::DoubleDefense => "Double Defense",
            Self::CriticalDefense => "Critical Defense",
            Self::Wound => "Wound",
        };
        write!(f, "{name}")
    }
}
