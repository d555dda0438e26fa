use super::board::Board;
use super::types::Mark;

pub type WinLine = [usize; 3];

/// 3 rows, 3 columns, 2 diagonals. Search order matters: callers report
/// the first matching line for highlighting.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}

pub fn find_winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
        .copied()
}

/// A full board that contains a win is a win, not a draw. Callers check
/// for wins first.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}
