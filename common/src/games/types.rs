use std::fmt;
use std::num::IntErrorKind;

use crate::error::{GameError, Result};
use crate::identifiers::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    PlayerA,
    PlayerB,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::PlayerA => 'X',
            Mark::PlayerB => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    TicTacToe,
    ConnectFour,
}

impl Variant {
    pub fn rows(&self) -> usize {
        match self {
            Variant::TicTacToe => 3,
            Variant::ConnectFour => 6,
        }
    }

    pub fn cols(&self) -> usize {
        match self {
            Variant::TicTacToe => 3,
            Variant::ConnectFour => 6,
        }
    }

    /// Number of equal markers in a row needed to win.
    pub fn win_length(&self) -> usize {
        match self {
            Variant::TicTacToe => 3,
            Variant::ConnectFour => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::TicTacToe => "Tic-Tac-Toe",
            Variant::ConnectFour => "Connect 4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A requested move. Coordinates stay signed until the board checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSpec {
    Cell { row: i64, col: i64 },
    Column(i64),
}

impl MoveSpec {
    /// Builds a move from raw command arguments for the given variant.
    pub fn parse(variant: Variant, args: &[&str]) -> Result<MoveSpec> {
        match variant {
            Variant::TicTacToe => {
                let [row, col] = args else {
                    return Err(GameError::MalformedMove(
                        "Please provide row and column for Tic-Tac-Toe (e.g., `!move 1 1`).".to_string(),
                    ));
                };
                match (parse_coordinate(row), parse_coordinate(col)) {
                    (Some(row), Some(col)) => Ok(MoveSpec::Cell { row, col }),
                    _ => Err(GameError::MalformedMove(
                        "Row and column must be integers.".to_string(),
                    )),
                }
            }
            Variant::ConnectFour => {
                let [col] = args else {
                    return Err(GameError::MalformedMove(
                        "Please provide a column for Connect 4 (e.g., `!move 2`).".to_string(),
                    ));
                };
                parse_coordinate(col)
                    .map(MoveSpec::Column)
                    .ok_or_else(|| GameError::MalformedMove("Column must be an integer.".to_string()))
            }
        }
    }

    pub fn fits(&self, variant: Variant) -> bool {
        matches!(
            (self, variant),
            (MoveSpec::Cell { .. }, Variant::TicTacToe) | (MoveSpec::Column(_), Variant::ConnectFour)
        )
    }
}

/// Integers too large for `i64` saturate; they are off the board either way.
fn parse_coordinate(text: &str) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}
