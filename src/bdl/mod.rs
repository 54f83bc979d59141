//! balldontlie NBA API: record types and HTTP client.

pub mod http;
pub mod types;

pub use http::{BdlClient, GamesQuery, StatsProvider, BDL_BASE_URL};
