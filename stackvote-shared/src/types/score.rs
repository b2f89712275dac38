use serde::{Deserialize, Serialize};

/// Represents the vote tally for a single target.
///
/// Always recomputed on demand from the current vote set, never cached or
/// persisted, so it is consistent with the ledger at read time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub upvotes: i64,
    pub downvotes: i64,
    pub net_score: i64,
}

impl ScoreSnapshot {
    /// Lifetime vote volume, regardless of polarity.
    pub fn total_votes(&self) -> i64 {
        self.upvotes + self.downvotes
    }
}
