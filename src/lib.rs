//! Pig dice game engine
//!
//! Two players take turns rolling a die, banking points with a hold or
//! losing the turn's points on a 1. The first banked score to reach the
//! target wins.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::game::{
    play_cpu_turn, simulate_match, simulate_match_within, CpuAction, CpuTurnOutcome, CpuTurnReport,
    MatchSummary, MAX_MATCH_TURNS,
};
pub use domain::entities::{Game, MatchRecord, Player, PlayerId, Turn, TurnState, NO_ROLL};
pub use domain::error::{PigError, Result};
pub use domain::services::{FixedDice, RandomSource, RngDice, Scoreboard, ScriptedDice};
pub use domain::value_objects::{GameSettings, GameSnapshot, ScoreLine, Seat, TurnContext};
pub use infrastructure::bot::strategies::{Decision, DecisionPolicy, EasyStrategy, SmartStrategy};
pub use infrastructure::bot::BotDifficulty;
pub use infrastructure::dice::RiggedDice;
