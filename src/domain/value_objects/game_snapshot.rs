use serde::{Deserialize, Serialize};

/// Name and banked score of one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
}

/// Read-only view of a game for display
///
/// Holds owned copies, so it stays valid after the game moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub target: u32,
    pub current_player: String,
    pub turn_points: u32,
    /// Scores in seat order
    pub scores: Vec<ScoreLine>,
    pub winner: Option<String>,
}

impl GameSnapshot {
    /// Score of the player with this name, if present
    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|line| line.name == name)
            .map(|line| line.score)
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
