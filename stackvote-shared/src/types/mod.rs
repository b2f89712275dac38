mod category;
mod filters;
mod polarity;
mod score;
mod scored_target;
mod tag;
mod target;
mod target_votes;
mod trending;
mod vote;
mod vote_cast;

pub use category::Category;
pub use filters::{InvalidSortKey, InvalidSortOrder, ListFilter, SortKey, SortOrder};
pub use polarity::{InvalidPolarity, Polarity};
pub use score::ScoreSnapshot;
pub use scored_target::{CategoryGroup, ScoredTarget};
pub use tag::Tag;
pub use target::Target;
pub use target_votes::TargetVotes;
pub use trending::{TrendingSnapshot, TrendingTarget};
pub use vote::Vote;
pub use vote_cast::{VoteOutcome, VoteTransition, transition};
