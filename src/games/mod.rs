//! Game implementations.
//!
//! Each variant pairs a rules engine (`game.rs`) with its computer
//! opponent (`search.rs`).

pub mod chess;
pub mod connect_four;
pub mod tictactoe;
