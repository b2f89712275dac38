//! This module defines and re-exports the interfaces for the vote ledger
//! and target store. It serves as a central point for accessing traits
//! related to data interaction.
mod targets;
mod votes;

pub use targets::{TargetQuery, TargetRepository};
pub use votes::VoteRepository;
