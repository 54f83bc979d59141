//! Core utilities for the NBA stats dashboard
//!
//! - `cache`: in-memory LRU caches for team and player lookups

pub mod cache;

pub use cache::{IdentityCache, LookupCache};
