//! Chess variant: full piece set, pseudo-legal moves, king capture wins.

mod game;
mod search;

pub use game::{Chess, ChessUndo, Color, Grid, Move, Piece, PieceKind, Square, SIZE};
pub use search::{evaluate, ChessAi, DEPTHS};
