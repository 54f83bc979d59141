//! NBA Stats Dashboard Library
//!
//! Backend for an NBA statistics dashboard built on the balldontlie API.
//! When the API tier rejects the season-averages or standings endpoints,
//! or they fail or come back empty, the service layer substitutes
//! synthetic records shaped exactly like the real ones.
//!
//! ## Features
//!
//! - **Fallback Generator**: position-aware season averages and standings
//!   derived from a single win total, with an injectable random source
//! - **Stats Client**: typed balldontlie client behind the `StatsProvider` trait
//! - **Data Access Layer**: provider first, synthetic data second, LRU-cached
//!   team and player lookups
//! - **HTTP API**: JSON endpoints with `{success, data}` envelopes
//! - **Dashboard Series**: leaderboard, points, shooting and radar chart data
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_dash::{fallback::FallbackGenerator, PlayerId, Position, Season};
//!
//! let generator = FallbackGenerator::seeded(42);
//! let averages = generator.season_averages(PlayerId::new(237), Position::Center, Season::new(2023));
//! assert!(averages.fg_pct >= 0.48);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BALLDONTLIE_API_KEY=your-key
//! export NBA_DASH_BIND=127.0.0.1:3000
//! ```

pub mod bdl;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod fallback;
pub mod service;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use bdl::types::{Game, Player, PlayerWithStats, SeasonAverages, Team, TeamData, TeamStanding};
pub use cli::types::{GameId, LeaderStat, PlayerId, Position, Season, TeamId};
pub use error::{DashError, Result};

pub const API_KEY_ENV_VAR: &str = "BALLDONTLIE_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "BALLDONTLIE_BASE_URL";
pub const BIND_ENV_VAR: &str = "NBA_DASH_BIND";
pub const MOCK_SEED_ENV_VAR: &str = "NBA_DASH_MOCK_SEED";
pub const CACHE_CAPACITY_ENV_VAR: &str = "NBA_DASH_CACHE_CAPACITY";
