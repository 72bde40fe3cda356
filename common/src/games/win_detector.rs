use super::board::Board;
use super::types::{Mark, Position, Variant, WinningLine};

/// Scan directions as (row step, col step): horizontal, vertical, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Returns the marker owning a complete line, if any.
pub fn evaluate(board: &Board, variant: Variant) -> Option<Mark> {
    find_winning_line(board, variant).map(|line| line.mark)
}

/// Returns the first complete line found. Each direction family is scanned over every
/// starting cell whose window fits on the board.
pub fn find_winning_line(board: &Board, variant: Variant) -> Option<WinningLine> {
    let length = variant.win_length();

    for (dr, dc) in DIRECTIONS {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if let Some(line) = check_window(board, Position::new(row, col), dr, dc, length) {
                    return Some(line);
                }
            }
        }
    }

    None
}

pub fn is_draw(board: &Board, variant: Variant) -> bool {
    board.is_full() && evaluate(board, variant).is_none()
}

fn offset(board: &Board, start: Position, dr: isize, dc: isize, steps: usize) -> Option<Position> {
    let row = start.row.checked_add_signed(dr * steps as isize)?;
    let col = start.col.checked_add_signed(dc * steps as isize)?;
    (row < board.rows() && col < board.cols()).then_some(Position::new(row, col))
}

fn check_window(
    board: &Board,
    start: Position,
    dr: isize,
    dc: isize,
    length: usize,
) -> Option<WinningLine> {
    let end = offset(board, start, dr, dc, length - 1)?;

    let mark = board.cell(start);
    if mark == Mark::Empty {
        return None;
    }

    for i in 1..length {
        let pos = offset(board, start, dr, dc, i)?;
        if board.cell(pos) != mark {
            return None;
        }
    }

    Some(WinningLine::new(mark, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_cells(start: Position, dr: isize, dc: isize, length: usize) -> Vec<Position> {
        (0..length as isize)
            .map(|i| {
                Position::new(
                    (start.row as isize + dr * i) as usize,
                    (start.col as isize + dc * i) as usize,
                )
            })
            .collect()
    }

    fn board_with(variant: Variant, cells: &[Position], mark: Mark) -> Board {
        let mut board = Board::new(variant);
        for pos in cells {
            board
                .place_at(pos.row as i64, pos.col as i64, mark)
                .unwrap();
        }
        board
    }

    fn tictactoe_lines() -> Vec<Vec<Position>> {
        let mut lines = Vec::new();
        for i in 0..3 {
            lines.push(line_cells(Position::new(i, 0), 0, 1, 3));
            lines.push(line_cells(Position::new(0, i), 1, 0, 3));
        }
        lines.push(line_cells(Position::new(0, 0), 1, 1, 3));
        lines.push(line_cells(Position::new(2, 0), -1, 1, 3));
        lines
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate(&Board::new(Variant::TicTacToe), Variant::TicTacToe), None);
        assert_eq!(evaluate(&Board::new(Variant::ConnectFour), Variant::ConnectFour), None);
    }

    #[test]
    fn test_every_tictactoe_line_wins() {
        let lines = tictactoe_lines();
        assert_eq!(lines.len(), 8);

        for line in lines {
            for mark in [Mark::PlayerA, Mark::PlayerB] {
                let board = board_with(Variant::TicTacToe, &line, mark);
                assert_eq!(evaluate(&board, Variant::TicTacToe), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_tictactoe_line_does_not_win() {
        let board = Board::from_rows(&["XXO", "   ", "   "]);

        assert_eq!(evaluate(&board, Variant::TicTacToe), None);
    }

    #[test]
    fn test_tictactoe_winning_line_endpoints() {
        let board = Board::from_rows(&["  O", " O ", "O  "]);

        let line = find_winning_line(&board, Variant::TicTacToe).unwrap();

        assert_eq!(line.mark, Mark::PlayerB);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_every_connect_four_window_wins() {
        let mut windows = 0;
        for (dr, dc) in DIRECTIONS {
            for row in 0..6 {
                for col in 0..6 {
                    let end_row = row as isize + dr * 3;
                    let end_col = col as isize + dc * 3;
                    if !(0..6).contains(&end_row) || !(0..6).contains(&end_col) {
                        continue;
                    }
                    windows += 1;
                    let cells = line_cells(Position::new(row, col), dr, dc, 4);
                    let board = board_with(Variant::ConnectFour, &cells, Mark::PlayerB);
                    assert_eq!(
                        evaluate(&board, Variant::ConnectFour),
                        Some(Mark::PlayerB),
                        "window {:?}",
                        cells
                    );
                }
            }
        }
        // 18 horizontal, 18 vertical, 9 per diagonal family.
        assert_eq!(windows, 54);
    }

    #[test]
    fn test_three_in_a_row_does_not_win_connect_four() {
        let cells = line_cells(Position::new(5, 0), 0, 1, 3);
        let board = board_with(Variant::ConnectFour, &cells, Mark::PlayerA);

        assert_eq!(evaluate(&board, Variant::ConnectFour), None);
    }

    #[test]
    fn test_mixed_connect_four_window_does_not_win() {
        let board = Board::from_rows(&[
            "      ",
            "      ",
            "      ",
            "      ",
            "      ",
            "XXOXXO",
        ]);

        assert_eq!(evaluate(&board, Variant::ConnectFour), None);
    }

    #[test]
    fn test_connect_four_anti_diagonal() {
        let board = Board::from_rows(&[
            "      ",
            "      ",
            "     X",
            "    XO",
            "   XOO",
            "  XOOX",
        ]);

        let line = find_winning_line(&board, Variant::ConnectFour).unwrap();

        assert_eq!(line.mark, Mark::PlayerA);
        assert_eq!(line.start, Position::new(5, 2));
        assert_eq!(line.end, Position::new(2, 5));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows(&["XOX", "XOO", "OXX"]);

        assert!(is_draw(&board, Variant::TicTacToe));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_rows(&["XXX", "OOX", "XOO"]);

        assert!(!is_draw(&board, Variant::TicTacToe));
        assert_eq!(evaluate(&board, Variant::TicTacToe), Some(Mark::PlayerA));
    }
}
