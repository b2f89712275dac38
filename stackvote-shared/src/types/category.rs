use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a category grouping voteable implementations.
///
/// Categories are only a grouping key for the ranking subsystem; they are
/// never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}
