use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Category, Tag};

/// Represents a voteable technology implementation.
///
/// A target is the aggregation root for votes; votes reference it weakly by
/// `target_id` and are never embedded here. The owning category rides along
/// so grouping and group ordering need no extra lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub github_url: Option<String>,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}
