use crate::Mark;

/// The error type for [`Board::place()`](crate::Board::place), i.e. for marking a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds {
        row: isize,
        col: isize,
    },
    CellOccupied {
        row: isize,
        col: isize,
        occupant: Mark,
    },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside of the board", row, col)
            }
            IllegalMove::CellOccupied { row, col, occupant } => write!(
                f,
                "Cell ({}, {}) is already marked by player {}",
                row, col, occupant
            ),
        }
    }
}

/// The error type for constructing a [`Board`](crate::Board) or [`TurnEngine`](crate::TurnEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidConfig {
    ZeroBoardSize,
    /// The cells of the board cannot be allocated.
    BoardTooLarge { size: usize },
    ZeroWinLength,
}

impl std::error::Error for InvalidConfig {}

impl std::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidConfig::ZeroBoardSize => write!(f, "The board must have at least one row"),
            InvalidConfig::BoardTooLarge { size } => {
                write!(f, "A board with {} rows and columns is too large", size)
            }
            InvalidConfig::ZeroWinLength => {
                write!(f, "At least one mark in a row must be needed to win")
            }
        }
    }
}
