//! The computer player seen from the session layer.

use crate::core::Difficulty;
use crate::rules::RulesEngine;

use super::stats::SearchStats;

/// Picks a reply for one side of a game.
///
/// `get_move` may mutate `game` while it searches but must hand it back
/// unchanged. The caller applies the returned move with
/// `RulesEngine::make_move`.
pub trait Opponent<G: RulesEngine> {
    /// Choose a move for `side`, or `None` if it has no legal move.
    fn get_move(&mut self, game: &mut G, side: G::Side) -> Option<G::Move>;

    /// Configured strength.
    fn difficulty(&self) -> Difficulty;

    /// Statistics of the most recent `get_move`.
    fn last_stats(&self) -> &SearchStats;
}
