//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify state
//! - Win/draw conditions
//!
//! This is the whole surface the session layer talks to. It never reaches
//! into a board directly.

use std::fmt::Debug;

use tracing::debug;

use crate::core::{MoveError, Side};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult<S> {
    /// Single winner.
    Winner(S),
    /// Board exhausted with no winner.
    Draw,
}

impl<S: Side> GameResult<S> {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: S) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `try_move`: must leave the state untouched on `Err`
/// - `legal_moves`: empty once the game is over
/// - `winner`: once set, only `reset` clears it
pub trait RulesEngine {
    /// The two players.
    type Side: Side;
    /// A single move (cell, column, from/to pair).
    type Move: Copy + Eq + Debug;
    /// Read-only board snapshot handed to serializers.
    type Grid: Clone + Debug;

    /// Short name used in log lines.
    const NAME: &'static str;

    /// Initial, non-terminal state.
    fn new_game() -> Self
    where
        Self: Sized;

    /// Restore the initial state in place.
    fn reset(&mut self);

    /// Current cell contents.
    fn board(&self) -> &Self::Grid;

    /// Validate and apply a move for `side`.
    fn try_move(&mut self, mv: Self::Move, side: Self::Side) -> Result<(), MoveError>;

    /// All legal moves for `side` in the current position.
    fn legal_moves(&self, side: Self::Side) -> Vec<Self::Move>;

    /// The winner, if a win condition has fired.
    fn winner(&self) -> Option<Self::Side>;

    /// True when a winner is decided or no further play is possible.
    fn game_over(&self) -> bool;

    // === Convenience Methods ===

    /// Boolean form of `try_move`: `false` means rejected and unchanged.
    fn make_move(&mut self, mv: Self::Move, side: Self::Side) -> bool {
        match self.try_move(mv, side) {
            Ok(()) => true,
            Err(reason) => {
                debug!(game = Self::NAME, ?mv, %side, %reason, "move rejected");
                false
            }
        }
    }

    /// Outcome of a finished game, `None` while play continues.
    fn result(&self) -> Option<GameResult<Self::Side>> {
        match self.winner() {
            Some(side) => Some(GameResult::Winner(side)),
            None if self.game_over() => Some(GameResult::Draw),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Letter;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Letter::O);
        assert!(!result.is_winner(Letter::X));
        assert!(result.is_winner(Letter::O));

        let draw: GameResult<Letter> = GameResult::Draw;
        assert!(!draw.is_winner(Letter::X));
        assert!(!draw.is_winner(Letter::O));
    }
}
