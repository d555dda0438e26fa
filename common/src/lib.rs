pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Board, BotInput, GameController, GameMode, GameSignal, GameSnapshot, GameStatus,
    InvalidMoveError, Mark, ScoreBoard, SessionRng, WinLine, calculate_move, check_draw,
    check_win, find_winning_line,
};
