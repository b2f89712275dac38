use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents the sort dimension of a ranked-list request.
///
/// Modeled as a closed enumeration so unknown values are rejected at the
/// boundary instead of silently falling back to a default.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Creation time of the target itself; no vote computation.
    Recent,
    /// Net score (upvotes minus downvotes).
    Popular,
    /// Time-windowed trending score.
    Trending,
    /// Lexicographic by target name; no vote computation.
    Name,
    /// Total vote count, regardless of polarity.
    Votes,
}

/// Represents the direction of a ranked-list sort.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A ranked-list request carried an unknown sort key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid sort key: {0}")]
pub struct InvalidSortKey(pub String);

/// A ranked-list request carried an unknown sort order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid sort order: {0}")]
pub struct InvalidSortOrder(pub String);

impl FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortKey::Recent),
            "popular" => Ok(SortKey::Popular),
            "trending" => Ok(SortKey::Trending),
            "name" => Ok(SortKey::Name),
            "votes" => Ok(SortKey::Votes),
            other => Err(InvalidSortKey(other.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(InvalidSortOrder(other.to_string())),
        }
    }
}

/// Represents the uniform filter/sort/truncate contract used by every
/// list-producing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    /// Category slug to restrict the candidate set to.
    pub category: Option<String>,
    /// Tag slugs; a target matches if it carries any of them.
    pub tags: Vec<String>,
    pub sort: SortKey,
    pub order: SortOrder,
    /// Truncates the final sorted sequence. No pagination cursor exists;
    /// every call re-sorts the full candidate set.
    pub limit: Option<usize>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            category: None,
            tags: Vec::new(),
            sort: SortKey::Recent,
            order: SortOrder::Desc,
            limit: None,
        }
    }
}
