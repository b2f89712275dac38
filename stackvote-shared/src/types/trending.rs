use serde::{Deserialize, Serialize};

use crate::types::Target;

/// Represents the time-windowed trending metrics for a single target.
///
/// `trending_score` blends sustained recent agreement with lifetime
/// popularity: `recent_net_score * min(recent_vote_volume, cap) + total
/// vote count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendingSnapshot {
    pub recent_net_score: i64,
    pub recent_vote_volume: i64,
    pub trending_score: i64,
}

/// A target paired with its trending metrics for one ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendingTarget {
    pub target: Target,
    pub trending: TrendingSnapshot,
}
