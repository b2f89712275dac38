//! Error types for the vote ledger.
//! Defines specific errors that can occur during database operations
//! related to vote records.
use thiserror::Error;

/// Represents errors that can occur within the vote ledger.
///
/// This enum consolidates various error conditions specific to database
/// interactions, such as SQLx errors during database operations.
#[derive(Debug, Error)]
pub enum VoteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid vote polarity: {0}")]
    InvalidPolarity(i16),
}
