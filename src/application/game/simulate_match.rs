use tracing::{info, warn};

use super::{play_cpu_turn, CpuTurnOutcome};
use crate::domain::entities::Game;
use crate::domain::error::{PigError, Result};
use crate::domain::value_objects::GameSnapshot;
use crate::infrastructure::bot::strategies::DecisionPolicy;

/// Simulate match output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub winner: String,
    /// Turns played by both seats together
    pub turns: u32,
    pub snapshot: GameSnapshot,
}

/// Turn budget used by [`simulate_match`]
pub const MAX_MATCH_TURNS: u32 = 100_000;

/// Play bot against bot until someone wins.
///
/// `policies[0]` acts for player 1, `policies[1]` for player 2. Gives up
/// after [`MAX_MATCH_TURNS`] turns.
pub fn simulate_match(game: &mut Game, policies: [&dyn DecisionPolicy; 2]) -> Result<MatchSummary> {
    simulate_match_within(game, policies, MAX_MATCH_TURNS)
}

/// Like [`simulate_match`] with an explicit turn budget.
///
/// Fails with `InvalidConfiguration` when nobody has won after `max_turns`
/// turns, e.g. two policies that both hold on nothing.
pub fn simulate_match_within(
    game: &mut Game,
    policies: [&dyn DecisionPolicy; 2],
    max_turns: u32,
) -> Result<MatchSummary> {
    if game.is_over() {
        return Err(PigError::GameAlreadyOver);
    }

    let mut turns = 0u32;
    while turns < max_turns {
        let policy = policies[game.current_seat().index()];
        let report = play_cpu_turn(game, policy)?;
        turns += 1;

        if let CpuTurnOutcome::Win { winner } = report.outcome {
            info!(
                winner = %winner,
                turns,
                target = game.target(),
                "Match finished"
            );
            return Ok(MatchSummary {
                winner,
                turns,
                snapshot: game.snapshot(),
            });
        }
    }

    warn!(
        max_turns,
        first = policies[0].name(),
        second = policies[1].name(),
        "Match stalled"
    );
    Err(PigError::InvalidConfiguration(format!(
        "match did not finish within {} turns",
        max_turns
    )))
}
