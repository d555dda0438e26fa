mod board;
mod bot;
mod controller;
mod error;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{BotInput, calculate_move};
pub use controller::{GameController, GameSignal, GameSnapshot, ScoreBoard};
pub use error::InvalidMoveError;
pub use game_state::GameState;
pub use session_rng::SessionRng;
pub use types::{GameMode, GameStatus, Mark};
pub use win_detector::{WIN_LINES, WinLine, check_draw, check_win, find_winning_line};
