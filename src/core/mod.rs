//! Core types shared by every variant: sides, difficulty, randomness, errors.
//!
//! Nothing in here knows about a particular board.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{DepthTable, Difficulty, ParseDifficultyError};
pub use error::MoveError;
pub use rng::GameRng;
pub use side::Side;
