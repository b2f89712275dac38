//! Error types for the stackvote repository crate.
//! Consolidates and re-exports error types related to vote ledger and
//! target store operations.
mod targets;
mod votes;

pub use targets::TargetRepositoryError;
pub use votes::VoteRepositoryError;
