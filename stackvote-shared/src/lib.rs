//! # Stackvote Shared
//! This crate defines shared data structures and types used across the
//! stackvote ranking ecosystem. It includes common definitions for votes,
//! targets, categories, derived score snapshots, and list filters.
pub mod types;
