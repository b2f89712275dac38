//! Error types for the stackvote application.
//! Consolidates errors from the ranking service and the repositories
//! behind a single top-level enum.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Service error: {0}")]
    Service(#[from] stackvote_engine::errors::ServiceError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Vote ledger error: {0}")]
    VoteRepository(#[from] stackvote_repository::VoteRepositoryError),
    #[error("Target store error: {0}")]
    TargetRepository(#[from] stackvote_repository::TargetRepositoryError),
}
