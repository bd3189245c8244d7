use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a learned (root, child) association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ChildState {
    /// Recorded but not pushed.
    #[default]
    Tracking = 0,
    /// Actively pushed.
    Promoted = 1,
    /// Was pushed; ratio fell. Not terminal.
    Demoted = 2,
}

impl ChildState {
    /// Compact encoding used for lock-free storage.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode from [`Self::as_u8`]. Unknown values fall back to `Tracking`.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Promoted,
            2 => Self::Demoted,
            _ => Self::Tracking,
        }
    }

    pub fn is_promoted(self) -> bool {
        self == Self::Promoted
    }
}

impl fmt::Display for ChildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tracking => "tracking",
            Self::Promoted => "promoted",
            Self::Demoted => "demoted",
        };
        f.write_str(name)
    }
}
