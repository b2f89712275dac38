//! Error types for the ranking service.
//! Defines specific errors that can occur while serving ranked views and
//! casting votes.
use stackvote_repository::{TargetRepositoryError, VoteRepositoryError};
use thiserror::Error;

/// Represents errors that can occur within the ranking service.
///
/// Repository errors propagate unmodified; the read path itself has no
/// failure modes of its own since empty vote sets and empty target sets
/// are valid zero-valued inputs.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("Vote ledger error: {0}")]
    VoteRepository(#[from] VoteRepositoryError),

    #[error("Target store error: {0}")]
    TargetRepository(#[from] TargetRepositoryError),
}
