use serde::{Deserialize, Serialize};

use super::match_record::{MatchRecord, MatchWinner};
use crate::config::Validate;

pub const DEFAULT_MAX_RECORDS: usize = 50;
pub const MAX_RECORDS_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStats {
    pub total: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Percentages rounded half up, 0 for an empty history.
    pub x_rate: usize,
    pub o_rate: usize,
}

/// Finished games, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchHistory {
    games: Vec<MatchRecord>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[MatchRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Appends a record and drops the oldest ones beyond `max_records`.
    pub fn push(&mut self, record: MatchRecord, max_records: usize) {
        self.games.push(record);
        if self.games.len() > max_records {
            let overflow = self.games.len() - max_records;
            self.games.drain(..overflow);
        }
    }

    /// Newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &MatchRecord> {
        self.games.iter().rev().take(count)
    }

    pub fn stats(&self) -> MatchStats {
        let count = |winner: MatchWinner| self.games.iter().filter(|g| g.winner == winner).count();

        let total = self.games.len();
        let x_wins = count(MatchWinner::X);
        let o_wins = count(MatchWinner::O);

        MatchStats {
            total,
            x_wins,
            o_wins,
            draws: count(MatchWinner::Draw),
            x_rate: rounded_percent(x_wins, total),
            o_rate: rounded_percent(o_wins, total),
        }
    }
}

fn rounded_percent(part: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (200 * part + total) / (2 * total)
}

impl Validate for MatchHistory {
    fn validate(&self) -> Result<(), String> {
        if self.games.len() > MAX_RECORDS_LIMIT {
            return Err(format!(
                "history holds {} games, at most {} are allowed",
                self.games.len(),
                MAX_RECORDS_LIMIT
            ));
        }
        if let Some(game) = self.games.iter().find(|g| g.played_at_ms < 0) {
            return Err(format!("game {} has a negative timestamp", game.id));
        }
        Ok(())
    }
}
