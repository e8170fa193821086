//! Scoreboard - history of finished matches
//!
//! In memory only; the record types derive serde so the host picks the
//! storage format.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Game, MatchRecord, Player};
use crate::domain::error::{PigError, Result};
use crate::domain::value_objects::ScoreLine;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    history: Vec<MatchRecord>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Record a finished game, stamped now.
    ///
    /// Fails with `NotFinished` while the game has no winner.
    pub fn record_from_game(&mut self, game: &Game) -> Result<()> {
        self.record_from_game_at(game, Utc::now())
    }

    pub fn record_from_game_at(&mut self, game: &Game, when: DateTime<Utc>) -> Result<()> {
        let winner = game.winner().ok_or(PigError::NotFinished)?;
        self.history.push(MatchRecord {
            when,
            target: game.target(),
            winner: winner.name().to_string(),
            scores: score_lines(game.players()),
        });
        Ok(())
    }

    /// Record a result without a `Game`
    pub fn record<'a>(
        &mut self,
        winner: &Player,
        players: impl IntoIterator<Item = &'a Player>,
        target: u32,
    ) {
        self.history.push(MatchRecord {
            when: Utc::now(),
            target,
            winner: winner.name().to_string(),
            scores: score_lines(players),
        });
    }

    /// The most recent `n` records, oldest first
    pub fn last(&self, n: usize) -> &[MatchRecord] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Wins per player name
    pub fn wins_table(&self) -> BTreeMap<String, u32> {
        let mut wins = BTreeMap::new();
        for record in &self.history {
            *wins.entry(record.winner.clone()).or_insert(0) += 1;
        }
        wins
    }

    /// Top `n` players by wins, ties broken by name
    pub fn top(&self, n: usize) -> Vec<(String, u32)> {
        let mut table: Vec<(String, u32)> = self.wins_table().into_iter().collect();
        table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        table.truncate(n);
        table
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

fn score_lines<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<ScoreLine> {
    players
        .into_iter()
        .map(|p| ScoreLine {
            name: p.name().to_string(),
            score: p.score(),
        })
        .collect()
}
