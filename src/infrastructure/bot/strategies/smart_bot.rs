//! Smart bot strategy
//!
//! Threshold scales with the distance to the target, then shifts with the
//! score gap and the opponent's distance to winning.

use super::{Decision, DecisionPolicy};
use crate::domain::value_objects::TurnContext;

pub const DEFAULT_MIN_THRESHOLD: i64 = 12;
pub const DEFAULT_MAX_THRESHOLD: i64 = 28;

/// Within this many points of the target, only hold to finish
const ENDGAME_WINDOW: u32 = 8;
/// Opponent this close to winning triggers the defensive floor
const DEFENSIVE_WINDOW: u32 = 15;
const DEFENSIVE_FLOOR: i64 = 22;

/// Smart difficulty bot strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartStrategy {
    pub min_threshold: i64,
    pub max_threshold: i64,
}

impl SmartStrategy {
    pub fn new(min_threshold: i64, max_threshold: i64) -> Self {
        Self {
            min_threshold,
            max_threshold,
        }
    }

    /// Hold threshold outside the tight endgame
    pub fn threshold(&self, ctx: &TurnContext) -> i64 {
        let base = i64::from(ctx.points_needed() / 2) + 8;
        // max(min, min(max, base)): a misconfigured min > max yields min
        let mut threshold = base.min(self.max_threshold).max(self.min_threshold);

        let gap = ctx.gap();
        if gap >= 20 {
            threshold += 6;
        } else if gap >= 10 {
            threshold += 3;
        } else if gap <= -20 {
            threshold -= 4;
        } else if gap <= -10 {
            threshold -= 2;
        }

        if ctx.opponent_needs() <= DEFENSIVE_WINDOW {
            threshold = threshold.max(DEFENSIVE_FLOOR);
        }

        threshold
    }
}

impl Default for SmartStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_THRESHOLD, DEFAULT_MAX_THRESHOLD)
    }
}

impl DecisionPolicy for SmartStrategy {
    fn decide(&self, ctx: &TurnContext) -> Decision {
        // Never hold on nothing
        if ctx.turn_points == 0 {
            return Decision::Roll;
        }

        if ctx.can_win_now() {
            return Decision::Hold;
        }

        let points_needed = ctx.points_needed();
        if points_needed <= ENDGAME_WINDOW {
            return if ctx.turn_points >= points_needed {
                Decision::Hold
            } else {
                Decision::Roll
            };
        }

        if i64::from(ctx.turn_points) >= self.threshold(ctx) {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }

    fn name(&self) -> &'static str {
        "smart"
    }
}
