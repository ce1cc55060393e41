//! Connect-four: a 6x7 grid with gravity, four in a line wins.

mod game;
mod search;

pub use game::{ConnectFour, ConnectFourUndo, Disc, Grid, COLS, CONNECT, ROWS};
pub use search::{evaluate, ConnectFourAi, CENTER_WEIGHT, DEPTHS, WIN_SCORE};
