//! Tic-tac-toe opponent.
//!
//! - easy: uniform random empty cell
//! - medium: coin flip between easy and hard on every move
//! - hard: random strong opening on an empty board, otherwise full-depth
//!   minimax without pruning

use tracing::debug;

use crate::core::{Difficulty, GameRng};
use crate::rules::RulesEngine;
use crate::search::{Minimax, Natural, Opponent, Score, SearchConfig, SearchStats};

use super::game::{Letter, TicTacToe, CELLS};

/// Corners and center.
pub const STRONG_OPENINGS: [usize; 5] = [0, 2, 4, 6, 8];

/// Terminal score: faster wins and slower losses score further from zero.
pub fn terminal_score(game: &TicTacToe, perspective: Letter) -> Score {
    let weight = game.empty_count() as Score + 1;
    match game.winner() {
        Some(winner) if winner == perspective => weight,
        Some(_) => -weight,
        None => 0,
    }
}

/// Tic-tac-toe computer player.
#[derive(Debug)]
pub struct TicTacToeAi {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl TicTacToeAi {
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

    fn easy_move(&mut self, game: &TicTacToe) -> Option<usize> {
        self.stats.reset();
        self.rng.choose(&game.available_moves()).copied()
    }

    fn hard_move(&mut self, game: &mut TicTacToe, letter: Letter) -> Option<usize> {
        if game.empty_count() == CELLS {
            self.stats.reset();
            return self.rng.choose(&STRONG_OPENINGS).copied();
        }

        let depth = game.empty_count() as u32 + 1;
        let mut search = Minimax::exhaustive(&terminal_score);
        let result = search.search(game, letter, depth, &mut Natural);
        self.stats = search.into_stats();
        result.best_move
    }
}

impl Opponent<TicTacToe> for TicTacToeAi {
    fn get_move(&mut self, game: &mut TicTacToe, letter: Letter) -> Option<usize> {
        let chosen = match self.config.difficulty {
            Difficulty::Easy => self.easy_move(game),
            Difficulty::Medium if self.rng.gen_bool(0.5) => self.easy_move(game),
            Difficulty::Medium | Difficulty::Hard => self.hard_move(game, letter),
        };
        debug!(
            game = TicTacToe::NAME,
            difficulty = %self.config.difficulty,
            side = %letter,
            chosen = ?chosen,
            nodes = self.stats.nodes,
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
