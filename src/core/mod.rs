//! Core module - pure game logic with no external dependencies
//!
//! Grid math, match validation, the state reducer, and the score trend.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod game;
pub mod grid;
pub mod history;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use game::GameState;
pub use grid::Grid;
pub use history::ScoreTrend;
pub use rng::SimpleRng;
pub use scoring::{is_match, match_delta};
pub use snapshot::GameSnapshot;
