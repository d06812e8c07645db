use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid direction")]
    InvalidDirection,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape is not a supported square")]
    InvalidBoardShape,
    #[error("Tile value is neither empty nor a power of two")]
    InvalidTile,
    #[error("Game is over, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
