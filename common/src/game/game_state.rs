use super::board::{Board, CELL_COUNT};
use super::error::InvalidMoveError;
use super::types::{GameStatus, Mark};
use super::win_detector::{WinLine, check_draw, find_winning_line};

/// One round of play: the board, whose turn it is, and whether the round
/// has finished. Turns always start with X.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    /// Places the current player's mark. The turn only switches while the
    /// round stays in progress, so `current_mark` still names the winner
    /// after a winning move.
    pub fn place_mark(&mut self, index: usize) -> Result<(), InvalidMoveError> {
        if self.status.is_terminal() {
            return Err(InvalidMoveError::GameNotActive);
        }

        if index >= CELL_COUNT {
            return Err(InvalidMoveError::OutOfRange { index });
        }

        if !self.board.is_empty_cell(index) {
            return Err(InvalidMoveError::CellOccupied { index });
        }

        self.board.set(index, self.current_mark);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(opponent) = self.current_mark.opponent() {
            self.current_mark = opponent;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = find_winning_line(&self.board, self.current_mark) {
            self.winning_line = Some(line);
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if check_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    /// Back to an empty in-progress board with X to move.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }
}
