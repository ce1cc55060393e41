//! Connect-four opponent: depth-limited alpha-beta over a center-column
//! heuristic.

use tracing::debug;

use crate::core::{DepthTable, Difficulty, GameRng};
use crate::rules::RulesEngine;
use crate::search::{Minimax, Opponent, RandomFirst, Score, SearchConfig, SearchStats};

use super::game::{ConnectFour, Disc};

/// Plies searched per difficulty. Easy never searches and plays randomly.
pub const DEPTHS: DepthTable = DepthTable {
    easy: 1,
    medium: 3,
    hard: 5,
};

/// Score for a decided game.
pub const WIN_SCORE: Score = 1000;

/// Points per own disc in the center column.
pub const CENTER_WEIGHT: Score = 3;

/// Leaf evaluation from `perspective`.
pub fn evaluate(game: &ConnectFour, perspective: Disc) -> Score {
    match game.winner() {
        Some(winner) if winner == perspective => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => game.center_count(perspective) as Score * CENTER_WEIGHT,
    }
}

/// Connect-four computer player.
#[derive(Debug)]
pub struct ConnectFourAi {
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl ConnectFourAi {
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

    /// Plies searched at the configured difficulty.
    #[must_use]
    pub fn depth(&self) -> u32 {
        DEPTHS.depth(self.config.difficulty)
    }

    fn random_move(&mut self, game: &ConnectFour) -> Option<usize> {
        self.rng.choose(&game.available_moves()).copied()
    }

    fn alpha_beta_move(&mut self, game: &mut ConnectFour, disc: Disc) -> Option<usize> {
        let depth = self.depth();
        let mut search = Minimax::alpha_beta(&evaluate);
        let result = search.search(game, disc, depth, &mut RandomFirst::new(&mut self.rng));
        self.stats = search.into_stats();

        debug!(
            game = ConnectFour::NAME,
            side = %disc,
            depth,
            score = result.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "alpha-beta finished"
        );
        result.best_move.or_else(|| self.random_move(game))
    }
}

impl Opponent<ConnectFour> for ConnectFourAi {
    fn get_move(&mut self, game: &mut ConnectFour, disc: Disc) -> Option<usize> {
        let chosen = match self.config.difficulty {
            Difficulty::Easy => {
                self.stats.reset();
                self.random_move(game)
            }
            Difficulty::Medium | Difficulty::Hard => self.alpha_beta_move(game, disc),
        };
        debug!(
            game = ConnectFour::NAME,
            difficulty = %self.config.difficulty,
            side = %disc,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchPosition;

    fn ai(difficulty: Difficulty, seed: u64) -> ConnectFourAi {
        ConnectFourAi::new(SearchConfig::new(difficulty).with_seed(seed))
    }

    fn drops(game: &mut ConnectFour, moves: &[(usize, Disc)]) {
        for &(col, disc) in moves {
            game.apply(col, disc);
        }
    }

    #[test]
    fn test_depths() {
        assert_eq!(ai(Difficulty::Easy, 0).depth(), 1);
        assert_eq!(ai(Difficulty::Medium, 0).depth(), 3);
        assert_eq!(ai(Difficulty::Hard, 0).depth(), 5);
    }

    #[test]
    fn test_evaluate() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(3, Disc::Red), (3, Disc::Yellow), (3, Disc::Red)]);
        assert_eq!(evaluate(&game, Disc::Red), 6);
        assert_eq!(evaluate(&game, Disc::Yellow), 3);

        drops(&mut game, &[(0, Disc::Yellow); 4]);
        assert_eq!(evaluate(&game, Disc::Yellow), WIN_SCORE);
        assert_eq!(evaluate(&game, Disc::Red), -WIN_SCORE);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut game = ConnectFour::new();
        drops(
            &mut game,
            &[(0, Disc::Yellow), (0, Disc::Yellow), (0, Disc::Yellow), (6, Disc::Red), (6, Disc::Red)],
        );
        for seed in 0..5 {
            let col = ai(Difficulty::Medium, seed).get_move(&mut game, Disc::Yellow);
            assert_eq!(col, Some(0));
        }
    }

    #[test]
    fn test_hard_blocks_three_in_a_row() {
        let mut game = ConnectFour::new();
        drops(
            &mut game,
            &[(0, Disc::Red), (1, Disc::Red), (2, Disc::Red), (0, Disc::Yellow), (1, Disc::Yellow)],
        );
        for seed in 0..5 {
            let col = ai(Difficulty::Hard, seed).get_move(&mut game, Disc::Yellow);
            assert_eq!(col, Some(3), "seed {seed}");
        }
    }

    #[test]
    fn test_search_restores_board() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(3, Disc::Red), (2, Disc::Yellow), (4, Disc::Red), (3, Disc::Yellow)]);
        let before = game.clone();

        let mut opponent = ai(Difficulty::Hard, 9);
        opponent.get_move(&mut game, Disc::Red);

        assert_eq!(game, before);
        assert!(opponent.last_stats().cutoffs > 0);
    }

    #[test]
    fn test_easy_plays_open_column() {
        let mut game = ConnectFour::new();
        drops(
            &mut game,
            &[(0, Disc::Red), (0, Disc::Yellow), (0, Disc::Red), (0, Disc::Yellow), (0, Disc::Red), (0, Disc::Yellow)],
        );
        let mut opponent = ai(Difficulty::Easy, 1);
        for _ in 0..30 {
            let col = opponent.get_move(&mut game, Disc::Yellow).unwrap();
            assert_ne!(col, 0);
        }
        assert_eq!(opponent.last_stats(), &SearchStats::default());
    }

    #[test]
    fn test_ties_resolve_to_random_column() {
        let flat = |_: &ConnectFour, _: Disc| 0;
        let picks: std::collections::HashSet<_> = (0..40)
            .filter_map(|seed| {
                let mut rng = GameRng::new(seed);
                let mut search = Minimax::alpha_beta(&flat);
                search
                    .search(&mut ConnectFour::new(), Disc::Red, 2, &mut RandomFirst::new(&mut rng))
                    .best_move
            })
            .collect();
        assert!(picks.len() > 1);
    }
}
