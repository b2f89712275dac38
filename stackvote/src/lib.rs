//! Stackvote
//!
//! This library is the composition root of the stackvote ranking engine:
//! configuration management, error handling, dependency wiring, and
//! tracing setup. Thin HTTP handlers construct `Dependencies` once and
//! call the `RankingService` it exposes.

pub mod config;
pub mod errors;
pub mod telemetry;

pub use config::Dependencies;
pub use errors::AppError;
