//! Tic-tac-toe: nine cells, three in a row wins.
//!
//! The hard opponent searches every line to the end of the game and never
//! loses.

mod game;
mod search;

pub use game::{Grid, Letter, TicTacToe, TicTacToeUndo, CELLS};
pub use search::{terminal_score, TicTacToeAi, STRONG_OPENINGS};
