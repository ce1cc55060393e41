//! Depth-first minimax with optional alpha-beta pruning.
//!
//! One driver serves every variant. The side that starts the search is the
//! maximizer; its opponent minimizes. Pruning only skips subtrees that
//! cannot change the root score, so `Minimax::alpha_beta` and
//! `Minimax::exhaustive` agree on the score for the same position, depth
//! and ordering.

use std::time::Instant;

use tracing::trace;

use crate::core::Side;

use super::ordering::MoveOrdering;
use super::position::{Evaluator, Score, SearchPosition, INFINITY};
use super::stats::SearchStats;

/// Best move found at a node and its backed-up score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored<M> {
    pub score: Score,
    /// `None` at leaves and when the side to move had no moves.
    pub best_move: Option<M>,
}

impl<M> Scored<M> {
    fn leaf(score: Score) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Alpha-beta bounds carried down the tree.
#[derive(Clone, Copy, Debug)]
struct Window {
    alpha: Score,
    beta: Score,
}

impl Window {
    const FULL: Window = Window {
        alpha: -INFINITY,
        beta: INFINITY,
    };
}

/// Tree search context.
///
/// Borrows the evaluator and owns the statistics of the last search.
pub struct Minimax<'e, E> {
    evaluator: &'e E,
    pruning: bool,
    stats: SearchStats,
}

impl<'e, E> Minimax<'e, E> {
    /// Search with alpha-beta cutoffs.
    pub fn alpha_beta(evaluator: &'e E) -> Self {
        Self {
            evaluator,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Visit every node down to the depth limit.
    pub fn exhaustive(evaluator: &'e E) -> Self {
        Self {
            evaluator,
            pruning: false,
            stats: SearchStats::default(),
        }
    }

    /// Statistics of the last `search` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume the context, keeping its statistics.
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies ahead for `to_move`.
    ///
    /// `position` is mutated during the search and restored before return.
    pub fn search<P, O>(
        &mut self,
        position: &mut P,
        to_move: P::Side,
        depth: u32,
        ordering: &mut O,
    ) -> Scored<P::Move>
    where
        P: SearchPosition,
        E: Evaluator<P>,
        O: MoveOrdering<P::Move>,
    {
        let start = Instant::now();
        self.stats.reset();

        let result = self.node(position, ordering, to_move, to_move, depth, 0, Window::FULL);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            side = %to_move,
            depth,
            pruning = self.pruning,
            score = result.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn node<P, O>(
        &mut self,
        position: &mut P,
        ordering: &mut O,
        perspective: P::Side,
        to_move: P::Side,
        depth: u32,
        ply: u32,
        mut window: Window,
    ) -> Scored<P::Move>
    where
        P: SearchPosition,
        E: Evaluator<P>,
        O: MoveOrdering<P::Move>,
    {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || position.is_terminal() {
            return self.leaf(position, perspective);
        }

        let mut moves = position.candidate_moves(to_move);
        if moves.is_empty() {
            return self.leaf(position, perspective);
        }
        ordering.order(&mut moves, ply);

        let maximizing = to_move == perspective;
        let mut best = Scored::leaf(if maximizing { -INFINITY } else { INFINITY });

        for mv in moves {
            let undo = position.apply(mv, to_move);
            let child = self
                .node(
                    position,
                    ordering,
                    perspective,
                    to_move.opponent(),
                    depth - 1,
                    ply + 1,
                    window,
                )
                .score;
            position.revert(undo);

            // Strict comparison: ties keep the earlier move.
            if maximizing {
                if child > best.score {
                    best = Scored {
                        score: child,
                        best_move: Some(mv),
                    };
                }
                window.alpha = window.alpha.max(child);
            } else {
                if child < best.score {
                    best = Scored {
                        score: child,
                        best_move: Some(mv),
                    };
                }
                window.beta = window.beta.min(child);
            }

            if self.pruning && window.beta <= window.alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    fn leaf<P>(&mut self, position: &P, perspective: P::Side) -> Scored<P::Move>
    where
        P: SearchPosition,
        E: Evaluator<P>,
    {
        self.stats.evaluations += 1;
        Scored::leaf(self.evaluator.evaluate(position, perspective))
    }
}
