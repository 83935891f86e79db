use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::games::tictactoe::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    X,
    O,
    Draw,
}

impl MatchWinner {
    pub fn badge(&self) -> &'static str {
        match self {
            MatchWinner::X => "X Wins",
            MatchWinner::O => "O Wins",
            MatchWinner::Draw => "Draw",
        }
    }
}

/// Summary of one finished game as kept in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub mode: GameMode,
    pub winner: MatchWinner,
    #[serde(default)]
    pub player_x: String,
    #[serde(default)]
    pub player_o: String,
    pub played_at_ms: i64,
}

impl MatchRecord {
    pub fn title(&self) -> String {
        let player_x = non_empty_or(&self.player_x, "X");
        match self.mode {
            GameMode::Pvp => format!("{} vs {}", player_x, non_empty_or(&self.player_o, "O")),
            GameMode::Computer => format!("{} vs AI", non_empty_or(&self.player_x, "You")),
        }
    }

    pub fn formatted_date(&self) -> String {
        format_timestamp(self.played_at_ms, &Local).unwrap_or_else(|| "unknown date".to_string())
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.title(), self.formatted_date(), self.winner.badge())
    }
}

fn non_empty_or<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.trim().is_empty() { fallback } else { name }
}

/// Renders a millisecond timestamp like `Mar 4, 14:05`.
pub fn format_timestamp<Tz>(timestamp_ms: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|date| date.format("%b %-d, %H:%M").to_string())
}
