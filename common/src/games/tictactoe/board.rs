use std::fmt;

use super::types::{CELL_COUNT, InvalidMove, InvalidMoveReason, Mark};

/// Row-major 3x3 grid. Whose turn it is follows from the mark counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.cell(index) == Some(Mark::Empty)
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        if mark == Mark::Empty {
            return Err(InvalidMove::new(index, InvalidMoveReason::EmptyMark));
        }
        match self.cells.get_mut(index) {
            None => Err(InvalidMove::new(index, InvalidMoveReason::OutOfRange)),
            Some(cell) if *cell != Mark::Empty => {
                Err(InvalidMove::new(index, InvalidMoveReason::CellOccupied))
            }
            Some(cell) => {
                *cell = mark;
                Ok(())
            }
        }
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    /// X moves first, so X is on turn whenever both marks have been played equally often.
    pub fn current_mark(&self) -> Mark {
        if self.count(Mark::X) <= self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

/// Convenience wrapper over [`Board::apply_move`].
pub fn apply_move(board: &mut Board, index: usize, mark: Mark) -> Result<(), InvalidMove> {
    board.apply_move(index, mark)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(f, "{}|{}|{}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
