use super::board::Board;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Picks the optimal cell for `bot_mark` with a full minimax search.
///
/// Candidates are tried in ascending index order and a later candidate only
/// replaces the current choice when it scores strictly higher, so among equally
/// good moves the lowest index wins. The caller's board is never modified.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    if bot_mark == Mark::Empty {
        return None;
    }

    let mut working = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        working.set(index, bot_mark);
        let score = minimax(&mut working, 0, false, bot_mark);
        working.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Alias matching the engine's public contract.
pub fn best_move(board: &Board, maximizer: Mark) -> Option<usize> {
    calculate_minimax_move(board, maximizer)
}

/// Scores `board` from `bot_mark`'s point of view.
///
/// Wins are worth `10 - depth` and losses `depth - 10`, so a quicker win and a
/// slower loss rank higher. `is_maximizing` says whose ply is next.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Win(winner) if winner == bot_mark => return WIN_SCORE - depth,
        Outcome::Win(_) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return 0;
    };
    let ply_mark = if is_maximizing { bot_mark } else { opponent_mark };

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
    for index in board.available_moves() {
        board.set(index, ply_mark);
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark);
        board.set(index, Mark::Empty);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}
