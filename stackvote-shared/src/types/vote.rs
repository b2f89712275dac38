use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Polarity;

/// Represents a user's vote on a target implementation.
///
/// The ledger guarantees at most one `Vote` per (voter, target) pair at any
/// time; a repeated cast toggles or flips the existing record instead of
/// creating a second one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub voter_id: String,
    pub target_id: Uuid,
    pub polarity: Polarity,
    pub cast_at: DateTime<Utc>,
}
