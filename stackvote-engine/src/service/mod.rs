//! The `RankingService` façade combining the score calculator, trending
//! estimator, and classifier under the uniform filter/sort/truncate
//! contract used by every list-producing surface.
mod ranking_service;

pub use ranking_service::RankingService;
