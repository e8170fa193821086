use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ScoreLine;

/// Finished match entity
///
/// Names are copied at record time, so later renames don't rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub when: DateTime<Utc>,
    pub target: u32,
    pub winner: String,
    pub scores: Vec<ScoreLine>,
}

impl MatchRecord {
    pub fn winner_score(&self) -> Option<u32> {
        self.scores
            .iter()
            .find(|line| line.name == self.winner)
            .map(|line| line.score)
    }
}
