use std::fmt;

use super::types::{Mark, MoveSpec, Position, Variant};
use crate::error::{GameError, Result};

/// Fixed-size grid of marks. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Mark>>,
    rows: usize,
    cols: usize,
}

impl Board {
    pub fn new(variant: Variant) -> Self {
        let (rows, cols) = (variant.rows(), variant.cols());
        Self {
            cells: vec![vec![Mark::Empty; cols]; rows],
            rows,
            cols,
        }
    }

    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let cells: Vec<Vec<Mark>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Mark::PlayerA,
                        'O' => Mark::PlayerB,
                        _ => Mark::Empty,
                    })
                    .collect()
            })
            .collect();
        let cols = cells.first().map_or(0, Vec::len);
        Self {
            rows: cells.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn cell(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    fn checked_row(&self, row: i64) -> Result<usize> {
        usize::try_from(row)
            .ok()
            .filter(|&r| r < self.rows)
            .ok_or(GameError::OutOfRange)
    }

    fn checked_col(&self, col: i64) -> Result<usize> {
        usize::try_from(col)
            .ok()
            .filter(|&c| c < self.cols)
            .ok_or(GameError::OutOfRange)
    }

    /// Places `mark` exactly at `row`/`col`.
    pub fn place_at(&mut self, row: i64, col: i64, mark: Mark) -> Result<Position> {
        let (row, col) = (self.checked_row(row)?, self.checked_col(col)?);
        if self.cells[row][col] != Mark::Empty {
            return Err(GameError::CellOccupied);
        }
        self.cells[row][col] = mark;
        Ok(Position::new(row, col))
    }

    /// Drops `mark` into `col`; it lands on the lowest empty cell.
    pub fn drop_in_column(&mut self, col: i64, mark: Mark) -> Result<Position> {
        let col = self.checked_col(col)?;
        if self.cells[0][col] != Mark::Empty {
            return Err(GameError::ColumnFull);
        }

        let Some(row) = (0..self.rows).rev().find(|&r| self.cells[r][col] == Mark::Empty) else {
            unreachable!("column {} has an empty top cell but no empty cell", col);
        };
        self.cells[row][col] = mark;
        Ok(Position::new(row, col))
    }

    /// Applies a move using the placement rule that matches its shape.
    pub fn place(&mut self, mv: MoveSpec, mark: Mark) -> Result<Position> {
        match mv {
            MoveSpec::Cell { row, col } => self.place_at(row, col, mark),
            MoveSpec::Column(col) => self.drop_in_column(col, mark),
        }
    }

    /// Every move that is currently legal, in row-major (or left-to-right) order.
    pub fn legal_moves(&self, variant: Variant) -> Vec<MoveSpec> {
        match variant {
            Variant::TicTacToe => self
                .cells
                .iter()
                .enumerate()
                .flat_map(|(row, cells)| {
                    cells.iter().enumerate().filter_map(move |(col, &cell)| {
                        (cell == Mark::Empty).then_some(MoveSpec::Cell {
                            row: row as i64,
                            col: col as i64,
                        })
                    })
                })
                .collect(),
            Variant::ConnectFour => (0..self.cols)
                .filter(|&col| self.cells[0][col] == Mark::Empty)
                .map(|col| MoveSpec::Column(col as i64))
                .collect(),
        }
    }

    pub fn render(&self) -> BoardView<'_> {
        BoardView { board: self }
    }
}

/// Text form of a board: cells joined by `" | "`, one line per row.
pub struct BoardView<'a> {
    board: &'a Board,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.board.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
