//! Speculative mutation and evaluation hooks used by the tree search.
//!
//! The search never clones a board. It asks the position to `apply` a move,
//! receives an undo record describing exactly what changed, recurses, and
//! hands the record back to `revert`. Every exit path out of a node goes
//! through `revert`, so the caller sees the board it passed in.

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::core::Side;

/// Evaluation score. Higher is better for the searching side.
pub type Score = i32;

/// Bound used for the initial alpha-beta window.
/// Negating it never overflows.
pub const INFINITY: Score = Score::MAX;

/// Candidate move list. Connect-four and tic-tac-toe never spill to the heap.
pub type MoveList<M> = SmallVec<[M; 16]>;

/// A position the search can mutate in place and restore.
pub trait SearchPosition {
    type Side: Side;
    type Move: Copy + Eq + Debug;
    /// Everything needed to put the position back after `apply`.
    type Undo;

    /// Moves `side` may try from here. Empty when terminal.
    fn candidate_moves(&self, side: Self::Side) -> MoveList<Self::Move>;

    /// Play `mv` for `side` without validation and record how to undo it.
    ///
    /// Only called with moves from `candidate_moves`.
    fn apply(&mut self, mv: Self::Move, side: Self::Side) -> Self::Undo;

    /// Restore the position captured in `undo`.
    fn revert(&mut self, undo: Self::Undo);

    /// True when the search should stop descending.
    fn is_terminal(&self) -> bool;
}

/// Static evaluation of a leaf position.
pub trait Evaluator<P: SearchPosition> {
    /// Score `position` from `perspective`'s point of view.
    fn evaluate(&self, position: &P, perspective: P::Side) -> Score;
}

impl<P, F> Evaluator<P> for F
where
    P: SearchPosition,
    F: Fn(&P, P::Side) -> Score,
{
    fn evaluate(&self, position: &P, perspective: P::Side) -> Score {
        self(position, perspective)
    }
}
