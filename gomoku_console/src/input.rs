use std::num::{IntErrorKind, ParseIntError};

/// The error type for [`parse_move()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    NotTwoNumbers { found: usize },
    NotANumber { token: String },
    /// A number too large (or too small) to be a coordinate on any board.
    CoordinateOutOfRange { token: String },
}

impl std::error::Error for ParseMoveError {}

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMoveError::NotTwoNumbers { found } => {
                write!(f, "expected a row and a column, got {} values", found)
            }
            ParseMoveError::NotANumber { token } => write!(f, "'{}' is not a number", token),
            ParseMoveError::CoordinateOutOfRange { token } => {
                write!(f, "'{}' is not a valid coordinate", token)
            }
        }
    }
}

/// Parses a line like `"3 4"` into a `(row, col)` pair.
///
/// Coordinates are not checked against the board here.
pub fn parse_move(line: &str) -> Result<(isize, isize), ParseMoveError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, col] = tokens.as_slice() else {
        return Err(ParseMoveError::NotTwoNumbers {
            found: tokens.len(),
        });
    };
    Ok((parse_coordinate(row)?, parse_coordinate(col)?))
}

fn parse_coordinate(token: &str) -> Result<isize, ParseMoveError> {
    token.parse().map_err(|err: ParseIntError| {
        let token = String::from(token);
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseMoveError::CoordinateOutOfRange { token }
            }
            _ => ParseMoveError::NotANumber { token },
        }
    })
}
