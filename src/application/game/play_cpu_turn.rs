use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::domain::entities::{Game, BUST_FACE};
use crate::domain::error::{PigError, Result};
use crate::infrastructure::bot::strategies::{Decision, DecisionPolicy};

/// One step taken by the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum CpuAction {
    Roll { value: u32 },
    Hold,
}

/// How the computer's turn ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ended", rename_all = "lowercase")]
pub enum CpuTurnOutcome {
    Bust { next_player: String },
    Hold { next_player: String },
    Win { winner: String },
}

impl CpuTurnOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CpuTurnOutcome::Bust { .. } => "bust",
            CpuTurnOutcome::Hold { .. } => "hold",
            CpuTurnOutcome::Win { .. } => "win",
        }
    }
}

/// Play cpu turn output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuTurnReport {
    pub outcome: CpuTurnOutcome,
    pub actions: SmallVec<[CpuAction; 8]>,
}

impl CpuTurnReport {
    /// Values rolled, in order
    pub fn rolls(&self) -> impl Iterator<Item = u32> + '_ {
        self.actions.iter().filter_map(|action| match action {
            CpuAction::Roll { value } => Some(*value),
            CpuAction::Hold => None,
        })
    }
}

/// Drive `policy` through one full turn for the current player.
///
/// Ends on a bust, a hold that passes the turn, or a hold that wins. Fails
/// with `GameAlreadyOver` on a finished game, and propagates random source
/// errors (the game keeps the state reached so far).
pub fn play_cpu_turn<P>(game: &mut Game, policy: &P) -> Result<CpuTurnReport>
where
    P: DecisionPolicy + ?Sized,
{
    if game.is_over() {
        return Err(PigError::GameAlreadyOver);
    }

    let mut actions = SmallVec::new();
    loop {
        match policy.decide(&game.decision_context()) {
            Decision::Roll => {
                let value = game.roll()?;
                actions.push(CpuAction::Roll { value });
                if value == BUST_FACE {
                    let next_player = game.current().name().to_string();
                    debug!(policy = policy.name(), %next_player, "CPU busted");
                    return Ok(CpuTurnReport {
                        outcome: CpuTurnOutcome::Bust { next_player },
                        actions,
                    });
                }
            }
            Decision::Hold => {
                // A non-winning hold moves the turn on, so take the name first
                let holder = game.current().name().to_string();
                game.hold()?;
                actions.push(CpuAction::Hold);

                let outcome = if game.is_over() {
                    CpuTurnOutcome::Win { winner: holder }
                } else {
                    CpuTurnOutcome::Hold {
                        next_player: game.current().name().to_string(),
                    }
                };
                debug!(policy = policy.name(), outcome = outcome.as_str(), "CPU turn over");
                return Ok(CpuTurnReport { outcome, actions });
            }
        }
    }
}
