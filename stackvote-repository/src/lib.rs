//! # Stackvote Repository
//! This crate provides traits and implementations for interacting with the
//! vote ledger and target store. It includes definitions for errors,
//! interfaces, and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{TargetRepositoryError, VoteRepositoryError};
pub use interfaces::{TargetQuery, TargetRepository, VoteRepository};
pub use postgres::{PostgresTargetRepository, PostgresVoteRepository};
