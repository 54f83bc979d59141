//! Type-safe wrappers and enums for NBA stats data.

pub mod filters;
pub mod ids;
pub mod position;
pub mod time;

pub use filters::LeaderStat;
pub use ids::{GameId, PlayerId, TeamId};
pub use position::Position;
pub use time::Season;
