use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents the direction of a single vote cast by a user.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    /// Indicates an upvote or positive endorsement.
    Up,
    /// Indicates a downvote or negative endorsement.
    Down,
}

/// A vote was cast with a value outside the closed `{UP, DOWN}` set.
///
/// Raised at the boundary, before any ledger access.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid vote polarity: {0}")]
pub struct InvalidPolarity(pub String);

impl Polarity {
    /// Wire encoding used by the vote ledger (`smallint` column).
    pub fn as_i16(self) -> i16 {
        match self {
            Polarity::Up => 0,
            Polarity::Down => 1,
        }
    }

    /// Decodes the ledger wire encoding. Returns `None` for unknown codes.
    pub fn from_i16(code: i16) -> Option<Self> {
        match code {
            0 => Some(Polarity::Up),
            1 => Some(Polarity::Down),
            _ => None,
        }
    }
}

impl FromStr for Polarity {
    type Err = InvalidPolarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(Polarity::Up),
            "DOWN" => Ok(Polarity::Down),
            other => Err(InvalidPolarity(other.to_string())),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Up => write!(f, "UP"),
            Polarity::Down => write!(f, "DOWN"),
        }
    }
}
