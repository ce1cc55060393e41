//! Chess-variant opponent: material-only alpha-beta.

use tracing::debug;

use crate::core::{DepthTable, Difficulty, GameRng};
use crate::rules::RulesEngine;
use crate::search::{Minimax, Opponent, Score, SearchConfig, SearchStats, ShuffleRoot};

use super::game::{Chess, Color, Move};

/// Plies searched per difficulty. Easy never searches and plays randomly.
pub const DEPTHS: DepthTable = DepthTable {
    easy: 1,
    medium: 2,
    hard: 3,
};

/// Leaf evaluation: material balance from `perspective`.
pub fn evaluate(game: &Chess, perspective: Color) -> Score {
    game.material(perspective)
}

/// Chess-variant computer player.
#[derive(Debug)]
pub struct ChessAi {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl ChessAi {
    pub fn new(config: SearchConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Replace the random source.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        DEPTHS.depth(self.config.difficulty)
    }

    fn random_move(&mut self, game: &Chess, color: Color) -> Option<Move> {
        self.rng.choose(&game.all_moves(color)).copied()
    }

    fn alpha_beta_move(&mut self, game: &mut Chess, color: Color) -> Option<Move> {
        let depth = self.depth();
        let mut search = Minimax::alpha_beta(&evaluate);
        let result = search.search(game, color, depth, &mut ShuffleRoot::new(&mut self.rng));
        self.stats = search.into_stats();

        debug!(
            game = Chess::NAME,
            side = %color,
            depth,
            score = result.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "alpha-beta finished"
        );
        result.best_move.or_else(|| self.random_move(game, color))
    }
}

impl Opponent<Chess> for ChessAi {
    fn get_move(&mut self, game: &mut Chess, color: Color) -> Option<Move> {
        let chosen = match self.config.difficulty {
            Difficulty::Easy => {
                self.stats.reset();
                self.random_move(game, color)
            }
            Difficulty::Medium | Difficulty::Hard => self.alpha_beta_move(game, color),
        };
        debug!(
            game = Chess::NAME,
            difficulty = %self.config.difficulty,
            side = %color,
            chosen = ?chosen,
            "opponent move"
        );
        chosen
    }

    fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    fn last_stats(&self) -> &SearchStats {
        &self.stats
    }
}
