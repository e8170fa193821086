use serde::{Deserialize, Serialize};

use crate::domain::error::{PigError, Result};

/// Default score needed to win
pub const DEFAULT_TARGET: u32 = 100;
/// Default number of die faces
pub const DEFAULT_DIE_SIDES: u32 = 6;

/// Game settings configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    /// Banked score needed to win (>= 1)
    pub target: u32,
    /// Faces on the die (>= 2)
    pub die_sides: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            die_sides: DEFAULT_DIE_SIDES,
        }
    }
}

impl GameSettings {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_target(self.target)?;
        validate_sides(self.die_sides)
    }
}

pub(crate) fn validate_target(target: u32) -> Result<()> {
    if target < 1 {
        return Err(PigError::InvalidTarget(target));
    }
    Ok(())
}

pub(crate) fn validate_sides(sides: u32) -> Result<()> {
    if sides < 2 {
        return Err(PigError::InvalidConfiguration(format!(
            "die must have at least 2 sides, got {}",
            sides
        )));
    }
    Ok(())
}
