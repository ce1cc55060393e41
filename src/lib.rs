//! # rust-boardgames
//!
//! Turn-based board games with difficulty-tiered computer opponents.
//!
//! ## Design Principles
//!
//! 1. **Rules and search are separate**: a game implements `RulesEngine` for
//!    callers and `SearchPosition` for the search. Opponents see the same
//!    state the caller does and hand it back unchanged.
//!
//! 2. **Speculative mutation with explicit undo**: search never clones a
//!    board. Each explored move returns an undo record that restores the
//!    position on every exit path, including pruning cutoffs.
//!
//! 3. **Rejected moves are values**: `try_move` returns a `MoveError`,
//!    `make_move` returns `false`, and neither touches the board.
//!
//! ## Modules
//!
//! - `core`: sides, difficulty, RNG, move errors
//! - `rules`: RulesEngine trait the session layer talks to
//! - `search`: minimax / alpha-beta driver, move ordering, opponent trait
//! - `games`: tic-tac-toe, connect-four and the chess variant

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{DepthTable, Difficulty, GameRng, MoveError, Side};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::search::{
    Evaluator, Minimax, MoveOrdering, Opponent, Score, Scored, SearchConfig, SearchPosition,
    SearchStats,
};

pub use crate::games::chess::{Chess, ChessAi};
pub use crate::games::connect_four::{ConnectFour, ConnectFourAi};
pub use crate::games::tictactoe::{TicTacToe, TicTacToeAi};
