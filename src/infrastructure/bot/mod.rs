pub mod strategies;

use serde::{Deserialize, Serialize};

use strategies::{DecisionPolicy, EasyStrategy, SmartStrategy};

/// Bot difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    Easy,
    Normal,
    Hard,
}

impl Default for BotDifficulty {
    fn default() -> Self {
        BotDifficulty::Normal
    }
}

impl BotDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotDifficulty::Easy => "easy",
            BotDifficulty::Normal => "normal",
            BotDifficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(BotDifficulty::Easy),
            "normal" => Some(BotDifficulty::Normal),
            "hard" => Some(BotDifficulty::Hard),
            _ => None,
        }
    }

    /// Build the strategy for this difficulty
    pub fn strategy(&self) -> Box<dyn DecisionPolicy> {
        match self {
            BotDifficulty::Easy => Box::new(EasyStrategy::new(18)),
            BotDifficulty::Normal => Box::new(SmartStrategy::default()),
            BotDifficulty::Hard => Box::new(SmartStrategy::new(14, 30)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TurnContext;
    use crate::infrastructure::bot::strategies::Decision;

    #[test]
    fn test_from_str() {
        assert_eq!(BotDifficulty::from_str("easy"), Some(BotDifficulty::Easy));
        assert_eq!(BotDifficulty::from_str("hard"), Some(BotDifficulty::Hard));
        assert_eq!(BotDifficulty::from_str("insane"), None);
        assert_eq!(BotDifficulty::from_str(BotDifficulty::Normal.as_str()), Some(BotDifficulty::Normal));
    }

    #[test]
    fn test_strategy_kinds() {
        assert_eq!(BotDifficulty::Easy.strategy().name(), "easy");
        assert_eq!(BotDifficulty::Normal.strategy().name(), "smart");
        assert_eq!(BotDifficulty::Hard.strategy().name(), "smart");
    }

    #[test]
    fn test_easy_threshold_is_18() {
        let bot = BotDifficulty::Easy.strategy();
        let ctx = |turn_points| TurnContext {
            my_score: 0,
            opponent_score: 0,
            turn_points,
            target: 100,
        };
        assert_eq!(bot.decide(&ctx(17)), Decision::Roll);
        assert_eq!(bot.decide(&ctx(18)), Decision::Hold);
    }

    #[test]
    fn test_hard_pushes_further_than_normal() {
        let normal = BotDifficulty::Normal.strategy();
        let hard = BotDifficulty::Hard.strategy();
        let ctx = TurnContext {
            my_score: 0,
            opponent_score: 0,
            turn_points: 29,
            target: 100,
        };
        assert_eq!(normal.decide(&ctx), Decision::Hold);
        assert_eq!(hard.decide(&ctx), Decision::Roll);
    }
}
