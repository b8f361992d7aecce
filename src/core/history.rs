//! Score trend - bounded history of score snapshots
//!
//! Appended on every successful match and rendered as a sparkline. Capacity is
//! fixed at 24 entries; the oldest entry is evicted first.

use arrayvec::ArrayVec;

use crate::types::SCORE_TREND_CAP;

#[derive(Debug, Clone, Default)]
pub struct ScoreTrend {
    entries: ArrayVec<u32, SCORE_TREND_CAP>,
}

impl ScoreTrend {
    /// A fresh trend holding a single zero entry
    pub fn new() -> Self {
        let mut trend = Self {
            entries: ArrayVec::new(),
        };
        trend.entries.push(0);
        trend
    }

    /// Append a score snapshot, evicting the oldest entry when full
    pub fn push(&mut self, score: u32) {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(score);
    }

    /// Reset to a single zero entry
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(0);
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent snapshot
    pub fn latest(&self) -> u32 {
        self.entries.last().copied().unwrap_or(0)
    }
}
