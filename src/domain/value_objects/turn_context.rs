use serde::{Deserialize, Serialize};

/// What a decision policy sees of the game, from the current player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnContext {
    pub my_score: u32,
    pub opponent_score: u32,
    pub turn_points: u32,
    pub target: u32,
}

impl TurnContext {
    /// Holding now would reach the target
    #[inline]
    pub fn can_win_now(&self) -> bool {
        u64::from(self.my_score) + u64::from(self.turn_points) >= u64::from(self.target)
    }

    /// Opponent lead; negative when we are ahead
    #[inline]
    pub fn gap(&self) -> i64 {
        i64::from(self.opponent_score) - i64::from(self.my_score)
    }

    #[inline]
    pub fn points_needed(&self) -> u32 {
        self.target.saturating_sub(self.my_score)
    }

    #[inline]
    pub fn opponent_needs(&self) -> u32 {
        self.target.saturating_sub(self.opponent_score)
    }
}
