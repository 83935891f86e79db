use tictactoe_common::games::tictactoe::{Board, Mark, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Cell(usize),
    Restart,
    Quit,
}

/// Cells are numbered 1-9 on screen and 0-8 on the board.
pub fn parse_input(line: &str) -> Option<PlayerInput> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "r" | "restart" => return Some(PlayerInput::Restart),
        "q" | "quit" | "exit" => return Some(PlayerInput::Quit),
        _ => {}
    }
    match line.parse::<usize>() {
        Ok(number @ 1..=9) => Some(PlayerInput::Cell(number - 1)),
        _ => None,
    }
}

pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Draws the grid; empty cells show their number, winning cells are bracketed.
pub fn render_board(board: &Board, highlight: Option<&WinningLine>) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let symbol = match board.cell(index) {
                        Some(Mark::Empty) | None => char::from(b'1' + index as u8),
                        Some(mark) => mark.symbol(),
                    };
                    if highlight.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
