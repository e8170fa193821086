use serde::{Deserialize, Serialize};

use crate::domain::entities::Player;
use crate::domain::error::Result;
use crate::domain::services::RandomSource;
use crate::domain::value_objects::Seat;

/// Returned by a roll that was ignored because the turn or game is over.
/// Never a real die value.
pub const NO_ROLL: u32 = 0;

/// Die face that ends the turn
pub const BUST_FACE: u32 = 1;

/// Turn status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnState {
    Active,
    Busted,
    Held,
}

impl Default for TurnState {
    fn default() -> Self {
        TurnState::Active
    }
}

impl TurnState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnState::Active => "active",
            TurnState::Busted => "busted",
            TurnState::Held => "held",
        }
    }

    pub fn is_finished(&self) -> bool {
        *self != TurnState::Active
    }
}

/// Turn entity - points accumulated by one seat before banking
///
/// The turn records which seat it belongs to; the game passes in the
/// matching player and its random source on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    seat: Seat,
    points: u32,
    state: TurnState,
}

impl Turn {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            points: 0,
            state: TurnState::Active,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_busted(&self) -> bool {
        self.state == TurnState::Busted
    }

    /// Roll once. A 1 forfeits the turn's points and finishes it.
    ///
    /// Returns `NO_ROLL` without drawing when the turn is already finished.
    pub fn roll<D: RandomSource + ?Sized>(&mut self, dice: &mut D, sides: u32) -> Result<u32> {
        if self.is_finished() {
            return Ok(NO_ROLL);
        }

        let value = dice.next(sides)?;
        if value == BUST_FACE {
            self.points = 0;
            self.state = TurnState::Busted;
        } else {
            self.points = self.points.saturating_add(value);
        }
        Ok(value)
    }

    /// Bank the turn's points into `player` and finish the turn.
    ///
    /// Points are left in place for inspection. No-op once finished.
    pub fn hold(&mut self, player: &mut Player) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        player.add_score(i64::from(self.points))?;
        self.state = TurnState::Held;
        Ok(())
    }

    /// Make the turn reusable
    pub fn reset(&mut self) {
        self.points = 0;
        self.state = TurnState::Active;
    }
}
