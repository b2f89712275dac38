use serde::{Deserialize, Serialize};

use crate::types::{Category, ScoreSnapshot, Target};

/// A target paired with its computed score and classification flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredTarget {
    pub target: Target,
    pub score: ScoreSnapshot,
    pub state_of_the_art: bool,
}

/// Represents one category's worth of state-of-the-art implementations,
/// sorted descending by net score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub implementations: Vec<ScoredTarget>,
}
