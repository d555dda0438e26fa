use super::board::CELL_COUNT;
use super::bot::{BotInput, calculate_move};
use super::error::InvalidMoveError;
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::types::{GameMode, GameStatus, Mark};
use super::win_detector::WinLine;

/// Win counters for both players. Zeroed when a mode is selected, kept
/// across in-mode resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
}

impl ScoreBoard {
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
            Mark::Empty => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One input from the presentation boundary. The controller has exactly
/// one handler arm per signal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    SelectMode(GameMode),
    PlaceMark(usize),
    Reset,
}

/// Everything the presentation layer needs after a processed signal:
/// board contents, whose turn it is, round status, both scores, and the
/// winning line to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [Mark; CELL_COUNT],
    pub current_mark: Mark,
    pub status: GameStatus,
    pub mode: GameMode,
    pub scores: ScoreBoard,
    pub winning_line: Option<WinLine>,
}

#[derive(Debug)]
struct GameSession {
    mode: GameMode,
    state: GameState,
}

/// Owns the whole mutable state of the program: the active session (absent
/// until a mode is selected), the scoreboard, and the session RNG.
#[derive(Debug)]
pub struct GameController {
    session: Option<GameSession>,
    scores: ScoreBoard,
    rng: SessionRng,
}

impl GameController {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            session: None,
            scores: ScoreBoard::default(),
            rng,
        }
    }

    /// Processes one signal to completion. Rejected moves surface as
    /// errors so callers can decide to ignore them.
    pub fn handle_signal(&mut self, signal: GameSignal) -> Result<(), InvalidMoveError> {
        match signal {
            GameSignal::SelectMode(mode) => {
                self.select_mode(mode);
                Ok(())
            }
            GameSignal::PlaceMark(index) => self.place_mark(index),
            GameSignal::Reset => {
                self.reset_round();
                Ok(())
            }
        }
    }

    /// Starts a fresh session. Re-selecting the current mode also zeroes
    /// the scores; only the in-mode reset keeps them.
    pub fn select_mode(&mut self, mode: GameMode) {
        self.scores.reset();
        self.session = Some(GameSession {
            mode,
            state: GameState::new(),
        });
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), InvalidMoveError> {
        let session = self
            .session
            .as_mut()
            .ok_or(InvalidMoveError::GameNotActive)?;

        session.state.place_mark(index)?;

        if let Some(winner) = session.state.winner() {
            self.scores.record_win(winner);
        }

        Ok(())
    }

    /// Clears the board back to an in-progress round. Mode and scores are
    /// kept. Does nothing before the first mode selection.
    pub fn reset_round(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.state.reset();
        }
    }

    /// True while it is the computer's turn in an in-progress
    /// human-vs-computer round. The computer always plays O.
    pub fn bot_turn_pending(&self) -> bool {
        self.session.as_ref().is_some_and(|session| {
            session.mode == GameMode::HumanVsComputer
                && session.state.status() == GameStatus::InProgress
                && session.state.current_mark() == Mark::O
        })
    }

    /// Selects and applies the computer's move, returning the chosen cell.
    /// The caller is responsible for any pacing delay beforehand.
    pub fn play_bot_turn(&mut self) -> Option<usize> {
        if !self.bot_turn_pending() {
            return None;
        }

        let input = BotInput::from_game_state(&self.session.as_ref()?.state);
        let index = calculate_move(&input, &mut self.rng)?;
        self.place_mark(index).ok()?;
        Some(index)
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.session.as_ref().map(|session| GameSnapshot {
            cells: *session.state.board().cells(),
            current_mark: session.state.current_mark(),
            status: session.state.status(),
            mode: session.mode,
            scores: self.scores,
            winning_line: session.state.winning_line(),
        })
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }
}
