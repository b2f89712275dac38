use crate::types::{Target, Vote};

/// A target together with its full vote set, captured once per ranking
/// pass so every computation in a single response sees the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVotes {
    pub target: Target,
    pub votes: Vec<Vote>,
}
