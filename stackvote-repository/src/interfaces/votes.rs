//! This module defines the `VoteRepository` trait, which provides an
//! interface for the vote ledger: reading raw vote records for one or many
//! targets, and the single mutating cast path. It abstracts the database
//! operations for persistence and retrieval.
use chrono::{DateTime, Utc};
use stackvote_shared::types::{Polarity, Vote, VoteOutcome};
use uuid::Uuid;

use crate::errors::VoteRepositoryError;

/// A trait that defines the interface for the vote ledger.
///
/// Implementors provide read access to raw vote records and the atomic
/// per-(voter, target) cast operation. The ledger, not its callers,
/// enforces the at-most-one-vote invariant.
#[async_trait::async_trait]
pub trait VoteRepository: Send + Sync {
    /// Fetches all vote records for a single target.
    ///
    /// # Arguments
    ///
    /// * `target_id` - The target whose ledger entries to read.
    ///
    /// # Returns
    ///
    /// A `Result` with the votes (empty if none) or a
    /// `VoteRepositoryError` if the read fails.
    async fn fetch_votes(&self, target_id: Uuid) -> Result<Vec<Vote>, VoteRepositoryError>;

    /// Fetches all vote records for a set of targets in one round trip.
    ///
    /// An empty `target_ids` slice is a no-op returning an empty vector.
    async fn fetch_votes_for_targets(
        &self,
        target_ids: &[Uuid],
    ) -> Result<Vec<Vote>, VoteRepositoryError>;

    /// Looks up the current vote of one voter on one target, if any.
    async fn find_vote(
        &self,
        voter_id: &str,
        target_id: Uuid,
    ) -> Result<Option<Vote>, VoteRepositoryError>;

    /// Casts a vote, applying the toggle/flip invariant atomically.
    ///
    /// A repeat cast of the same polarity retracts the existing record;
    /// the opposite polarity replaces it in place; otherwise a new record
    /// is created. The whole check-then-write runs as a single
    /// transaction per (voter, target) pair.
    ///
    /// # Returns
    ///
    /// The `VoteOutcome` describing which transition was applied, or a
    /// `VoteRepositoryError` if the transaction fails.
    async fn cast_vote(
        &self,
        voter_id: &str,
        target_id: Uuid,
        polarity: Polarity,
        cast_at: DateTime<Utc>,
    ) -> Result<VoteOutcome, VoteRepositoryError>;
}
