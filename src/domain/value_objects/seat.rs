use serde::{Deserialize, Serialize};

use crate::domain::error::{PigError, Result};

/// Position of a player in the game's fixed pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    First,
    Second,
}

impl Default for Seat {
    fn default() -> Self {
        Seat::First
    }
}

impl Seat {
    /// The opposite seat
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Zero-based index into the player pair
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// One-based player number as shown to users
    #[inline]
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(player_no: u8) -> Result<Self> {
        match player_no {
            1 => Ok(Seat::First),
            2 => Ok(Seat::Second),
            other => Err(PigError::InvalidPlayerNumber(other)),
        }
    }
}
