//! Scoring module - match validation and score deltas
//!
//! Match rules:
//! - Both cells must hold a tile.
//! - Pips match when equal, or when they sum to exactly ten.
//! - An equal pair scores twice the pip value; a sum pair always scores ten.

use crate::types::{MatchError, MATCH_SUM};

/// Validate a pair of pips and compute the score delta.
///
/// `a` and `b` are raw cell values (0 = empty).
pub fn match_delta(a: u8, b: u8) -> Result<u32, MatchError> {
    if a == 0 || b == 0 {
        return Err(MatchError::EmptyCell);
    }
    if a == b {
        Ok(2 * a as u32)
    } else if a + b == MATCH_SUM {
        Ok(MATCH_SUM as u32)
    } else {
        Err(MatchError::NotAMatch)
    }
}

/// Check whether a pair of pips would match (without scoring)
pub fn is_match(a: u8, b: u8) -> bool {
    match_delta(a, b).is_ok()
}
