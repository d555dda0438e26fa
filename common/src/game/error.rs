/// Move rejection is not fatal: callers treat a rejected move as a no-op,
/// so the board is observably unchanged.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("cell index {index} is outside the board")]
    OutOfRange { index: usize },
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },
    #[error("game is not active")]
    GameNotActive,
}
