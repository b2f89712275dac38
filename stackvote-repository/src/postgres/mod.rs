//! PostgreSQL implementations of the stackvote repositories.
mod target_repository;
mod vote_repository;

pub use target_repository::PostgresTargetRepository;
pub use vote_repository::PostgresVoteRepository;
