use std::fmt;

use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::types::{GameMode, InvalidMove, Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};
use crate::history::{MatchRecord, MatchWinner};

/// In computer games the AI always plays O.
pub const AI_MARK: Mark = Mark::O;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceMarkError {
    GameOver,
    NotYourTurn,
    Invalid(InvalidMove),
}

impl fmt::Display for PlaceMarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceMarkError::GameOver => write!(f, "Game is already over"),
            PlaceMarkError::NotYourTurn => write!(f, "Not your turn"),
            PlaceMarkError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlaceMarkError {}

impl From<InvalidMove> for PlaceMarkError {
    fn from(e: InvalidMove) -> Self {
        PlaceMarkError::Invalid(e)
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub player_x: String,
    pub player_o: String,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, player_x: String, player_o: String) -> Self {
        Self {
            board: Board::new(),
            mode,
            player_x,
            player_o,
            last_move: None,
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.board.current_mark()
    }

    pub fn current_player_name(&self) -> &str {
        self.player_name(self.current_mark())
    }

    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.player_o,
            _ => &self.player_x,
        }
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::Computer
            && self.current_mark() == AI_MARK
            && !self.outcome().is_terminal()
    }

    /// Places the mark of the player on turn. Humans may not move for the AI.
    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, PlaceMarkError> {
        if self.is_ai_turn() {
            return Err(PlaceMarkError::NotYourTurn);
        }
        self.apply(index)
    }

    /// Lets the AI play its move. Returns the chosen cell and the resulting outcome.
    pub fn play_ai_move(&mut self) -> Result<(usize, Outcome), PlaceMarkError> {
        if !self.is_ai_turn() {
            return Err(PlaceMarkError::NotYourTurn);
        }
        let index = calculate_minimax_move(&self.board, AI_MARK).ok_or(PlaceMarkError::GameOver)?;
        let outcome = self.apply(index)?;
        Ok((index, outcome))
    }

    /// Applies a move computed elsewhere (e.g. on a worker thread) for the AI.
    pub fn apply_ai_move(&mut self, index: usize) -> Result<Outcome, PlaceMarkError> {
        if !self.is_ai_turn() {
            return Err(PlaceMarkError::NotYourTurn);
        }
        self.apply(index)
    }

    fn apply(&mut self, index: usize) -> Result<Outcome, PlaceMarkError> {
        if self.outcome().is_terminal() {
            return Err(PlaceMarkError::GameOver);
        }

        let mark = self.current_mark();
        self.board.apply_move(index, mark)?;
        self.last_move = Some(index);

        Ok(self.outcome())
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.last_move = None;
    }

    /// Summary of a finished game, `None` while it is still running.
    pub fn to_match_record(&self, finished_at_ms: i64) -> Option<MatchRecord> {
        let winner = match self.outcome() {
            Outcome::InProgress => return None,
            Outcome::Draw => MatchWinner::Draw,
            Outcome::Win(Mark::O) => MatchWinner::O,
            Outcome::Win(_) => MatchWinner::X,
        };

        Some(MatchRecord {
            id: finished_at_ms,
            mode: self.mode,
            winner,
            player_x: self.player_x.clone(),
            player_o: self.player_o.clone(),
            played_at_ms: finished_at_ms,
        })
    }
}
