use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::{PigError, Result};
use crate::domain::value_objects::Seat;

/// Opaque player identity, stable across renames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Player entity - one of the two seats in a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    id: PlayerId,
    name: String,
    score: u32,
}

impl Player {
    /// Create a new player with a fresh identity
    pub fn new(name: &str) -> Result<Self> {
        let name = clean_name(name)?;
        Ok(Self {
            id: PlayerId::generate(),
            name,
            score: 0,
        })
    }

    /// Create a player named "Player 1" or "Player 2" for the seat
    pub fn default_for(seat: Seat) -> Self {
        Self {
            id: PlayerId::generate(),
            name: format!("Player {}", seat.number()),
            score: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Change the display name, keeping the identity
    pub fn rename(&mut self, new_name: &str) -> Result<()> {
        self.name = clean_name(new_name)?;
        Ok(())
    }

    /// Bank points into the score
    pub fn add_score(&mut self, points: i64) -> Result<()> {
        let delta = u32::try_from(points).map_err(|_| PigError::InvalidPoints(points))?;
        self.score = self
            .score
            .checked_add(delta)
            .ok_or(PigError::InvalidPoints(points))?;
        Ok(())
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} pts", self.name, self.score)
    }
}

fn clean_name(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PigError::InvalidName);
    }
    Ok(trimmed.to_string())
}
