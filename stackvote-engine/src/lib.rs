//! # Stackvote Engine
//! This crate defines the ranking and aggregation core of stackvote: the
//! score calculator, the time-windowed trending estimator, the
//! state-of-the-art classifier, and the `RankingService` façade that
//! combines them over injected repositories, along with error handling.
//!
//! All scoring is synchronous, single-pass arithmetic over vote sets
//! fetched just-in-time; nothing here holds state between calls.
pub mod classifier;
pub mod errors;
pub mod score;
pub mod service;
pub mod trending;

pub use service::RankingService;
