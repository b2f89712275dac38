use stackvote_shared::types::Target;
use uuid::Uuid;

use crate::errors::TargetRepositoryError;

/// Static-attribute filter applied when fetching targets.
///
/// All fields are conjunctive. `None`/empty means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetQuery {
    /// Category slug.
    pub category: Option<String>,
    /// Tag slugs; a target matches if it carries any of them.
    pub tags: Vec<String>,
    /// Exact-name allowlist.
    pub names: Option<Vec<String>>,
}

/// Trait for interacting with the target store.
///
/// Targets carry static attributes only; votes are never embedded and are
/// read through the `VoteRepository`.
#[async_trait::async_trait]
pub trait TargetRepository: Send + Sync {
    /// Fetches targets matching the query, ordered by `created_at` (newest
    /// first) with id as a deterministic tiebreak. This ordering is the
    /// stable baseline every ranked list preserves on ties.
    async fn fetch_targets(&self, query: &TargetQuery)
    -> Result<Vec<Target>, TargetRepositoryError>;

    /// Fetches a single target by id.
    async fn fetch_target(&self, id: Uuid) -> Result<Option<Target>, TargetRepositoryError>;

    /// Fetches a single target by slug.
    async fn fetch_target_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Target>, TargetRepositoryError>;
}
