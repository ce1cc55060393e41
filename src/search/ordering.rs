//! Move ordering policies.
//!
//! Ordering never changes a node's score, only which of several equally
//! scored moves is reported (ties go to the move tried first) and how much
//! alpha-beta can prune.

use crate::core::GameRng;

/// Reorders candidate moves before a node iterates them.
pub trait MoveOrdering<M> {
    /// `ply` is 0 at the root.
    fn order(&mut self, moves: &mut [M], ply: u32);
}

/// Keep generation order. Used by tests that need reproducible trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<M> MoveOrdering<M> for Natural {
    fn order(&mut self, _moves: &mut [M], _ply: u32) {}
}

/// Shuffle the root move list so equal-value lines vary between games.
#[derive(Debug)]
pub struct ShuffleRoot<'r> {
    rng: &'r mut GameRng,
}

impl<'r> ShuffleRoot<'r> {
    pub fn new(rng: &'r mut GameRng) -> Self {
        Self { rng }
    }
}

impl<M> MoveOrdering<M> for ShuffleRoot<'_> {
    fn order(&mut self, moves: &mut [M], ply: u32) {
        if ply == 0 {
            self.rng.shuffle(moves);
        }
    }
}

/// Move one uniformly chosen candidate to the front, keep the rest in order.
///
/// With strict-improvement tie-breaking this makes the random pick the
/// default answer when every candidate scores the same.
#[derive(Debug)]
pub struct RandomFirst<'r> {
    rng: &'r mut GameRng,
}

impl<'r> RandomFirst<'r> {
    pub fn new(rng: &'r mut GameRng) -> Self {
        Self { rng }
    }
}

impl<M> MoveOrdering<M> for RandomFirst<'_> {
    fn order(&mut self, moves: &mut [M], _ply: u32) {
        if moves.len() > 1 {
            let pick = self.rng.gen_range_usize(0..moves.len());
            moves[..=pick].rotate_right(1);
        }
    }
}
