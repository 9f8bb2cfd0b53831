use thiserror::Error;

/// Construction-time failures.
///
/// Once a board and session exist, rejected inputs (illegal moves,
/// unknown player ids, invalid words) are ordinary return values, never
/// errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("player roster must not be empty")]
    EmptyRoster,
}
