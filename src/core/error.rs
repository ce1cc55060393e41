//! Move rejection reasons.
//!
//! A rejected move never mutates the game. Callers that only need the
//! boolean contract use `RulesEngine::make_move`; callers that want to
//! report why use `RulesEngine::try_move`.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinates out of range")]
    OutOfBounds,
    #[error("target cell is occupied")]
    Occupied,
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("no piece on the source square")]
    EmptySquare,
    #[error("it is not this side's turn")]
    WrongTurn,
    #[error("destination is not reachable by the piece")]
    IllegalDestination,
    #[error("the game is already over")]
    GameOver,
}
