//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each position
//! - How moves modify state
//! - Win/draw conditions
//!
//! Search code and the session layer call into `RulesEngine` but never
//! interpret game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
