use std::io::{BufRead, Write};

use gomoku::{Board, InvalidConfig, Mark, Orientation, Outcome, TurnEngine};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::input::parse_move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonBy { mark: Mark, orientation: Orientation },
    Tie,
    /// The input ended before the game did.
    Aborted,
}

/// Returned when a move is submitted after the game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    /// The outcome of the move that ended the game.
    pub outcome: Outcome,
}

impl std::error::Error for GameOver {}

impl std::fmt::Display for GameOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The game is already over, no more moves can be played")
    }
}

/// One game: the board, whose turn it is, and whether the game has ended.
pub struct Session {
    board: Board,
    engine: TurnEngine,
    current_mark: Mark,
    final_outcome: Option<Outcome>,
}

impl Session {
    pub fn new(config: &GameConfig, first: Mark) -> Result<Self, InvalidConfig> {
        Ok(Self {
            board: Board::new(config.size)?,
            engine: TurnEngine::new(config.win_length)?,
            current_mark: first,
            final_outcome: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that the next submitted move places.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn is_over(&self) -> bool {
        self.final_outcome.is_some()
    }

    /// Plays a move for the current player.
    ///
    /// The turn passes to the other player only if the game continues, so
    /// after an invalid move the same player tries again.
    pub fn submit(&mut self, row: isize, col: isize) -> Result<Outcome, GameOver> {
        if let Some(outcome) = self.final_outcome {
            return Err(GameOver { outcome });
        }
        let outcome = self
            .engine
            .apply_move(&mut self.board, row, col, self.current_mark);
        match outcome {
            Outcome::Continue => self.current_mark = self.current_mark.opponent(),
            Outcome::Win(_) | Outcome::Tie => self.final_outcome = Some(outcome),
            Outcome::Invalid(_) => {}
        }
        Ok(outcome)
    }
}

/// Runs a game with moves read line by line from `input`, until somebody
/// wins, the board is full or the input ends.
///
/// Returns an error only on IO failure, not when an invalid move is entered.
pub fn play_game<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> anyhow::Result<GameResult> {
    writeln!(output, "{}", session.board())?;
    let mut lines = input.lines();
    loop {
        let mark = session.current_mark();
        writeln!(output, "Player {}, enter your move as <row> <col>:", mark)?;
        let Some(line) = lines.next() else {
            info!("Input ended before the game was decided");
            return Ok(GameResult::Aborted);
        };
        let line = line?;
        let (row, col) = match parse_move(&line) {
            Ok(coordinates) => coordinates,
            Err(err) => {
                debug!(%err, "Unparseable input");
                writeln!(output, "Invalid input ({}). Please type again.", err)?;
                continue;
            }
        };

        match session.submit(row, col)? {
            Outcome::Invalid(err) => {
                writeln!(
                    output,
                    "{}, {} is an invalid move ({}). Please type again.",
                    row, col, err
                )?;
            }
            Outcome::Continue => {
                writeln!(output, "{}", session.board())?;
            }
            Outcome::Win(orientation) => {
                writeln!(output, "{}", session.board())?;
                writeln!(output, "Player {} won!", mark)?;
                info!(%mark, %orientation, moves = session.board().num_marked(), "Game won");
                return Ok(GameResult::WonBy { mark, orientation });
            }
            Outcome::Tie => {
                writeln!(output, "{}", session.board())?;
                writeln!(output, "Tie")?;
                info!(moves = session.board().num_marked(), "Game tied");
                return Ok(GameResult::Tie);
            }
        }
    }
}
