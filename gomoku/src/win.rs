use serde::{Deserialize, Serialize};

use crate::{Board, Cell, InvalidConfig, Mark};

/// One of the four directions along which a line can be formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// From the top left to the bottom right, like `\`.
    Diagonal,
    /// From the top right to the bottom left, like `/`.
    AntiDiagonal,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    /// The `(row, col)` step that moves one cell along the line.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (1, -1),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal \\",
            Orientation::AntiDiagonal => "diagonal /",
        };
        write!(f, "{}", name)
    }
}

/// Decides whether the mark just placed on a cell completes a line of at
/// least `win_length` equal marks.
///
/// Only the cells within `win_length - 1` steps of the placed mark are ever
/// looked at, so the cost does not depend on the board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinDetector {
    win_length: usize,
}

impl WinDetector {
    pub fn new(win_length: usize) -> Result<Self, InvalidConfig> {
        if win_length == 0 {
            return Err(InvalidConfig::ZeroWinLength);
        }
        Ok(Self { win_length })
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The length of the run through `(row, col)` along `orientation`,
    /// counted up to `win_length - 1` cells in either direction.
    ///
    /// Panics if the cell is out of bounds or empty.
    pub fn run_length(
        &self,
        board: &Board,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> usize {
        let target = origin_mark(board, row, col);
        let (d_row, d_col) = orientation.delta();
        1 + self.count_ray(board, row, col, (d_row, d_col), target)
            + self.count_ray(board, row, col, (-d_row, -d_col), target)
    }

    /// The first orientation (in the order of [`Orientation::ALL`]) in which
    /// the mark at `(row, col)` is part of a winning run.
    ///
    /// Panics if the cell is out of bounds or empty.
    pub fn winning_orientation(
        &self,
        board: &Board,
        row: isize,
        col: isize,
    ) -> Option<Orientation> {
        Orientation::ALL
            .into_iter()
            .find(|&orientation| self.run_length(board, row, col, orientation) >= self.win_length)
    }

    pub fn is_winning_move(&self, board: &Board, row: isize, col: isize) -> bool {
        self.winning_orientation(board, row, col).is_some()
    }

    // Counts the cells equal to `target`, starting next to the origin and
    // stopping at the edge of the board or the first other cell.
    fn count_ray(
        &self,
        board: &Board,
        row: isize,
        col: isize,
        (d_row, d_col): (isize, isize),
        target: Mark,
    ) -> usize {
        let target = Cell::from(target);
        (1..self.win_length)
            .map(|step| {
                let step = step as isize;
                board.get(row + step * d_row, col + step * d_col)
            })
            .take_while(|&cell| cell == Some(target))
            .count()
    }
}

fn origin_mark(board: &Board, row: isize, col: isize) -> Mark {
    match board.get(row, col) {
        Some(cell) => match cell.mark() {
            Some(mark) => mark,
            None => panic!("Checked for a win at ({}, {}), but that cell is empty", row, col),
        },
        None => panic!(
            "Checked for a win at ({}, {}), which is outside of the board",
            row, col
        ),
    }
}
