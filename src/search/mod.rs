//! Adversarial search shared by every variant.
//!
//! ## Overview
//!
//! - **In-place search**: positions implement `SearchPosition`; every
//!   speculative move returns an explicit undo record that the search hands
//!   back before leaving the node, including on alpha-beta cutoffs.
//! - **One driver**: `Minimax` runs plain minimax or alpha-beta over any
//!   `SearchPosition` with a pluggable `Evaluator` and `MoveOrdering`.
//! - **Injectable randomness**: opponents own a `GameRng` built from
//!   `SearchConfig`, so seeded tests are reproducible.
//!
//! ## Usage
//!
//! ```rust
//! use rust_boardgames::core::Difficulty;
//! use rust_boardgames::games::connect_four::{ConnectFour, ConnectFourAi, Disc};
//! use rust_boardgames::rules::RulesEngine;
//! use rust_boardgames::search::{Opponent, SearchConfig};
//!
//! let mut game = ConnectFour::new_game();
//! assert!(game.make_move(3, Disc::Red));
//!
//! let config = SearchConfig::new(Difficulty::Medium).with_seed(42);
//! let mut ai = ConnectFourAi::new(config);
//! let reply = ai.get_move(&mut game, Disc::Yellow).unwrap();
//! assert!(game.make_move(reply, Disc::Yellow));
//! ```

pub mod config;
pub mod minimax;
pub mod opponent;
pub mod ordering;
pub mod position;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{Minimax, Scored};
pub use opponent::Opponent;
pub use ordering::{MoveOrdering, Natural, RandomFirst, ShuffleRoot};
pub use position::{Evaluator, MoveList, Score, SearchPosition, INFINITY};
pub use stats::SearchStats;
