use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a free-form tag attached to a target, used only as a list
/// filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}
