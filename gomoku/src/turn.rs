use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Board, IllegalMove, InvalidConfig, Mark, Orientation, WinDetector};

/// A single mark to be placed by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: isize,
    pub col: isize,
    pub mark: Mark,
}

/// Summarizes the outcome of attempting a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The move was rejected and the board is unchanged.
    Invalid(IllegalMove),
    Continue,
    /// The move completed a line, running in the given orientation.
    Win(Orientation),
    /// The move filled the last empty cell without completing a line.
    Tie,
}

impl Outcome {
    /// Does this outcome end the game?
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win(_) | Outcome::Tie)
    }
}

/// Validates moves, applies them to a board and classifies the result.
///
/// The engine only holds the win length. Whose turn it is, and whether the
/// game has already ended, is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnEngine {
    detector: WinDetector,
}

impl TurnEngine {
    /// Creates an engine where `win_length` marks in a row win.
    ///
    /// A win length larger than the board is allowed; such a game can only end in a tie.
    pub fn new(win_length: usize) -> Result<Self, InvalidConfig> {
        Ok(Self {
            detector: WinDetector::new(win_length)?,
        })
    }

    pub fn win_length(&self) -> usize {
        self.detector.win_length()
    }

    /// Places `mark` at `(row, col)` and reports what that did to the game.
    ///
    /// A win is checked before a full board, so a move that fills the last
    /// cell and completes a line is a [`Outcome::Win`].
    pub fn apply_move(&self, board: &mut Board, row: isize, col: isize, mark: Mark) -> Outcome {
        if let Err(err) = board.place(row, col, mark) {
            debug!(row, col, %mark, %err, "Move rejected");
            return Outcome::Invalid(err);
        }
        trace!(row, col, %mark, "Move applied");

        if let Some(orientation) = self.detector.winning_orientation(board, row, col) {
            debug!(row, col, %mark, %orientation, "Line completed");
            Outcome::Win(orientation)
        } else if board.is_full() {
            debug!(row, col, %mark, "Board filled without a line");
            Outcome::Tie
        } else {
            Outcome::Continue
        }
    }

    pub fn play(&self, board: &mut Board, mv: Move) -> Outcome {
        self.apply_move(board, mv.row, mv.col, mv.mark)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::arbitrary::MarkedBoard;
    use crate::Cell;

    // Plays the moves in order, alternating marks starting with `Mark::A`,
    // and returns the outcome of every move.
    fn play_all(size: usize, win_length: usize, moves: &[(isize, isize)]) -> Vec<Outcome> {
        let engine = TurnEngine::new(win_length).unwrap();
        let mut board = Board::new(size).unwrap();
        let mut mark = Mark::A;
        moves
            .iter()
            .map(|&(row, col)| {
                let outcome = engine.apply_move(&mut board, row, col, mark);
                mark = mark.opponent();
                outcome
            })
            .collect()
    }

    quickcheck! {
        fn out_of_bounds_is_invalid(input: MarkedBoard, row: i8, col: i8, mark: Mark) -> TestResult {
            let (row, col) = (row as isize, col as isize);
            if input.board.is_in_bounds(row, col) {
                return TestResult::discard();
            }
            let mut board = input.board.clone();
            let outcome = TurnEngine::new(3).unwrap().apply_move(&mut board, row, col, mark);
            TestResult::from_bool(
                outcome == Outcome::Invalid(IllegalMove::OutOfBounds { row, col })
                    && board == input.board
            )
        }

        fn occupied_is_invalid(input: MarkedBoard, row: u8, col: u8, mark: Mark) -> TestResult {
            let size = input.board.size() as u8;
            let (row, col) = ((row % size) as isize, (col % size) as isize);
            let Some(occupant) = input.board.get(row, col).and_then(Cell::mark) else {
                return TestResult::discard();
            };
            let mut board = input.board.clone();
            let outcome = TurnEngine::new(3).unwrap().apply_move(&mut board, row, col, mark);
            TestResult::from_bool(
                outcome == Outcome::Invalid(IllegalMove::CellOccupied { row, col, occupant })
                    && board == input.board
            )
        }

        fn first_move_wins_with_length_one(size: u8, row: u8, col: u8, mark: Mark) -> bool {
            let size = size % 8 + 1;
            let mut board = Board::new(size as usize).unwrap();
            let outcome = TurnEngine::new(1)
                .unwrap()
                .apply_move(&mut board, (row % size) as isize, (col % size) as isize, mark);
            outcome == Outcome::Win(Orientation::Horizontal)
        }

        fn never_wins_beyond_board_size(size: u8, moves: Vec<(u8, u8)>) -> bool {
            let size = size % 5 + 1;
            let moves: Vec<(isize, isize)> = moves
                .into_iter()
                .map(|(row, col)| ((row % (size + 1)) as isize, (col % (size + 1)) as isize))
                .collect();
            play_all(size as usize, size as usize + 1, &moves)
                .into_iter()
                .all(|outcome| !matches!(outcome, Outcome::Win(_)))
        }
    }

    #[test]
    fn zero_win_length_is_rejected() {
        assert_eq!(TurnEngine::new(0), Err(InvalidConfig::ZeroWinLength));
    }

    #[test]
    fn horizontal_win() {
        // O plays the top row, X plays the middle row
        let outcomes = play_all(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(
            outcomes,
            [
                Outcome::Continue,
                Outcome::Continue,
                Outcome::Continue,
                Outcome::Continue,
                Outcome::Win(Orientation::Horizontal),
            ]
        );
    }

    #[test]
    fn diagonal_wins() {
        let outcomes = play_all(4, 3, &[(0, 0), (0, 3), (1, 1), (1, 3), (2, 2)]);
        assert_eq!(outcomes.last(), Some(&Outcome::Win(Orientation::Diagonal)));

        let outcomes = play_all(3, 3, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(
            outcomes.last(),
            Some(&Outcome::Win(Orientation::AntiDiagonal))
        );
    }

    #[test]
    fn longer_run_still_wins() {
        // O fills the gap in O O . O
        let outcomes = play_all(5, 3, &[(0, 0), (4, 0), (0, 1), (4, 2), (0, 3), (4, 4), (0, 2)]);
        assert_eq!(outcomes.last(), Some(&Outcome::Win(Orientation::Horizontal)));
    }

    #[test]
    fn full_board_without_line_is_a_tie() {
        // O X O
        // O X X
        // X O O
        let outcomes = play_all(
            3,
            3,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert!(outcomes[..8].iter().all(|&o| o == Outcome::Continue));
        assert_eq!(outcomes[8], Outcome::Tie);
    }

    #[test]
    fn win_takes_precedence_over_tie() {
        // O X O
        // X O X
        // X O O
        let outcomes = play_all(
            3,
            3,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert!(outcomes[..8].iter().all(|&o| o == Outcome::Continue));
        assert_eq!(outcomes[8], Outcome::Win(Orientation::Diagonal));
    }

    #[test]
    fn rejected_move_does_not_count() {
        let engine = TurnEngine::new(2).unwrap();
        let mut board = Board::new(2).unwrap();
        assert_eq!(engine.apply_move(&mut board, 0, 0, Mark::A), Outcome::Continue);
        assert_eq!(
            engine.play(&mut board, Move { row: 0, col: 0, mark: Mark::B }),
            Outcome::Invalid(IllegalMove::CellOccupied {
                row: 0,
                col: 0,
                occupant: Mark::A
            })
        );
        assert_eq!(
            engine.apply_move(&mut board, 0, 2, Mark::B),
            Outcome::Invalid(IllegalMove::OutOfBounds { row: 0, col: 2 })
        );
        assert_eq!(board.num_marked(), 1);
        assert_eq!(engine.apply_move(&mut board, 1, 1, Mark::B), Outcome::Continue);
    }

    #[test]
    fn move_serialization() {
        let mv = Move {
            row: 2,
            col: -1,
            mark: Mark::B,
        };
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"row":2,"col":-1,"mark":"b"}"#);
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }

    #[test]
    fn terminal_outcomes() {
        assert!(Outcome::Tie.is_terminal());
        assert!(Outcome::Win(Orientation::Vertical).is_terminal());
        assert!(!Outcome::Continue.is_terminal());
        assert!(!Outcome::Invalid(IllegalMove::OutOfBounds { row: -1, col: 0 }).is_terminal());
    }
}
