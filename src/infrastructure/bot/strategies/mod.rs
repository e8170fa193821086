//! Bot strategies module
//!
//! Contains the computer decision policies for the game.

mod easy_bot;
mod smart_bot;

pub use easy_bot::*;
pub use smart_bot::*;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TurnContext;

/// Bot decision: keep rolling or bank the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Roll,
    Hold,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Roll => "roll",
            Decision::Hold => "hold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "roll" => Some(Decision::Roll),
            "hold" => Some(Decision::Hold),
            _ => None,
        }
    }
}

/// Decision policy trait
///
/// Implementations are pure: the same context always yields the same
/// decision.
pub trait DecisionPolicy: Send + Sync {
    fn decide(&self, ctx: &TurnContext) -> Decision;

    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> DecisionPolicy for F
where
    F: Fn(&TurnContext) -> Decision + Send + Sync,
{
    fn decide(&self, ctx: &TurnContext) -> Decision {
        self(ctx)
    }
}
