//! Jurisdiction codes.
//!
//! Every budget line belongs to one of the eight Australian states and
//! territories or to the federal government. The set is closed: rows carrying
//! any other code are rejected or skipped when a dataset is loaded.

use serde::{Deserialize, Serialize};

/// A state, territory, or the federal entry.
///
/// Variants are declared in the order the dashboard lists them, which is also
/// their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// New South Wales
    #[serde(rename = "NSW")]
    Nsw,
    /// Victoria
    #[serde(rename = "VIC")]
    Vic,
    /// Queensland
    #[serde(rename = "QLD")]
    Qld,
    /// Western Australia
    #[serde(rename = "WA")]
    Wa,
    /// South Australia
    #[serde(rename = "SA")]
    Sa,
    /// Tasmania
    #[serde(rename = "TAS")]
    Tas,
    /// Australian Capital Territory
    #[serde(rename = "ACT")]
    Act,
    /// Northern Territory
    #[serde(rename = "NT")]
    Nt,
    /// Commonwealth spending, reported against the national population.
    Federal,
}

impl Jurisdiction {
    /// All jurisdictions, in display order.
    pub const ALL: [Self; 9] = [
        Self::Nsw,
        Self::Vic,
        Self::Qld,
        Self::Wa,
        Self::Sa,
        Self::Tas,
        Self::Act,
        Self::Nt,
        Self::Federal,
    ];

    /// Position in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The code used in the dataset's `State` column.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Act => "ACT",
            Self::Nt => "NT",
            Self::Federal => "Federal",
        }
    }

    /// The `STATE_NAME` used by the boundary file.
    ///
    /// `Federal` has no region on the map.
    #[must_use]
    pub const fn state_name(self) -> Option<&'static str> {
        match self {
            Self::Nsw => Some("New South Wales"),
            Self::Vic => Some("Victoria"),
            Self::Qld => Some("Queensland"),
            Self::Wa => Some("Western Australia"),
            Self::Sa => Some("South Australia"),
            Self::Tas => Some("Tasmania"),
            Self::Act => Some("Australian Capital Territory"),
            Self::Nt => Some("Northern Territory"),
            Self::Federal => None,
        }
    }

    /// Resolves a boundary file `STATE_NAME` to a jurisdiction.
    #[must_use]
    pub fn from_state_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|j| j.state_name().is_some_and(|n| n == name))
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NSW" => Ok(Self::Nsw),
            "VIC" => Ok(Self::Vic),
            "QLD" => Ok(Self::Qld),
            "WA" => Ok(Self::Wa),
            "SA" => Ok(Self::Sa),
            "TAS" => Ok(Self::Tas),
            "ACT" => Ok(Self::Act),
            "NT" => Ok(Self::Nt),
            "FEDERAL" => Ok(Self::Federal),
            _ => Err(format!("Unknown jurisdiction: {s}")),
        }
    }
}
