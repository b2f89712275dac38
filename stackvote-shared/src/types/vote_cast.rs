use serde::{Deserialize, Serialize};

use crate::types::Polarity;

/// Represents the outcome of a cast against the vote ledger, as reported
/// back to the caller.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteOutcome {
    /// A new vote record was created.
    Created,
    /// An existing vote flipped to the opposite polarity.
    Updated,
    /// An existing vote of the same polarity was retracted.
    Removed,
}

/// Represents the ledger state transition a cast resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteTransition {
    /// No existing vote: insert a new record.
    Create,
    /// Existing vote of the opposite polarity: replace it in place.
    Flip,
    /// Existing vote of the same polarity: delete the record.
    Retract,
}

/// Resolves a cast into a ledger transition.
///
/// This is the single decision table for the at-most-one-vote invariant.
/// Both the PostgreSQL ledger transaction and in-memory test doubles apply
/// it, so the toggle and flip semantics cannot drift between them.
pub fn transition(existing: Option<Polarity>, incoming: Polarity) -> VoteTransition {
    match existing {
        None => VoteTransition::Create,
        Some(current) if current == incoming => VoteTransition::Retract,
        Some(_) => VoteTransition::Flip,
    }
}

impl VoteTransition {
    /// The outcome reported to callers once the transition is applied.
    pub fn outcome(self) -> VoteOutcome {
        match self {
            VoteTransition::Create => VoteOutcome::Created,
            VoteTransition::Flip => VoteOutcome::Updated,
            VoteTransition::Retract => VoteOutcome::Removed,
        }
    }
}
