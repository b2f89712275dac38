use thiserror::Error;

/// Represents errors that can occur within the target store.
///
/// This enum consolidates various error conditions specific to database
/// interactions, such as SQLx errors during database operations.
#[derive(Debug, Error)]
pub enum TargetRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
