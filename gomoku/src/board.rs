use crate::{visualize_board, Cell, IllegalMove, InvalidConfig, Mark};

/// A square grid of cells.
///
/// Coordinates are signed so that any `(row, col)` a caller comes up with can
/// be checked, but only `0 <= row, col < size` ever refers to a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, always `size * size` entries.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    pub fn new(size: usize) -> Result<Self, InvalidConfig> {
        if size == 0 {
            return Err(InvalidConfig::ZeroBoardSize);
        }
        let num_cells = size
            .checked_mul(size)
            .ok_or(InvalidConfig::BoardTooLarge { size })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(num_cells)
            .map_err(|_| InvalidConfig::BoardTooLarge { size })?;
        cells.resize(num_cells, Cell::Empty);
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some()
    }

    /// Reads the cell at the given coordinate.
    pub fn cell_at(&self, row: isize, col: isize) -> Result<Cell, IllegalMove> {
        self.get(row, col)
            .ok_or(IllegalMove::OutOfBounds { row, col })
    }

    /// Like [`Self::cell_at()`], but out-of-bounds coordinates simply yield `None`.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Marks an empty cell.
    ///
    /// The board is left untouched if this returns an error.
    pub fn place(&mut self, row: isize, col: isize, mark: Mark) -> Result<(), IllegalMove> {
        let idx = self
            .index(row, col)
            .ok_or(IllegalMove::OutOfBounds { row, col })?;
        if let Some(occupant) = self.cells[idx].mark() {
            return Err(IllegalMove::CellOccupied { row, col, occupant });
        }
        self.cells[idx] = Cell::from(mark);
        Ok(())
    }

    /// Are there no empty cells left?
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// The number of cells that carry a mark.
    pub fn num_marked(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&row| row < self.size)?;
        let col = usize::try_from(col).ok().filter(|&col| col < self.size)?;
        Some(row * self.size + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
