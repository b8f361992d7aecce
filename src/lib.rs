//! Ten-pair: a terminal number-matching puzzle.
//!
//! Clear pairs of tiles that are equal or sum to ten; columns compact upward,
//! six matches advance the level, and a daily-challenge screen tracks
//! persisted completion toggles.

pub mod core;
pub mod feedback;
pub mod store;
pub mod term;
pub mod types;
pub mod ui;
