mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, apply_move};
pub use bot_controller::{best_move, calculate_minimax_move, minimax};
pub use game_state::{AI_MARK, PlaceMarkError, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, CELL_COUNT, GameMode, InvalidMove, InvalidMoveReason, Mark, Outcome, WinningLine,
    is_terminal,
};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line, evaluate};
