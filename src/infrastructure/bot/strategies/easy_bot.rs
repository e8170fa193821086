//! Easy bot strategy
//!
//! Fixed threshold bot, nudged by the score gap.

use super::{Decision, DecisionPolicy};
use crate::domain::value_objects::TurnContext;

pub const DEFAULT_BASE_THRESHOLD: i64 = 20;

/// Easy difficulty bot strategy
///
/// Unlike [`SmartStrategy`](super::SmartStrategy) it may hold with zero
/// turn points when its threshold drops that low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasyStrategy {
    pub base_threshold: i64,
}

impl EasyStrategy {
    pub fn new(base_threshold: i64) -> Self {
        Self { base_threshold }
    }

    fn threshold(&self, ctx: &TurnContext) -> i64 {
        let gap = ctx.gap();
        if gap >= 25 {
            self.base_threshold + 10
        } else if gap >= 10 {
            self.base_threshold + 5
        } else if gap <= -20 {
            self.base_threshold - 4
        } else {
            self.base_threshold
        }
    }
}

impl Default for EasyStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_THRESHOLD)
    }
}

impl DecisionPolicy for EasyStrategy {
    fn decide(&self, ctx: &TurnContext) -> Decision {
        if ctx.can_win_now() {
            return Decision::Hold;
        }

        if i64::from(ctx.turn_points) >= self.threshold(ctx) {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }

    fn name(&self) -> &'static str {
        "easy"
    }
}
