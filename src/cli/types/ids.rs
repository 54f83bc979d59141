//! ID types for balldontlie resources.

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA team IDs.
///
/// Keeps team IDs from being mixed up with player or game IDs when they
/// travel through the service layer and query strings.
///
/// # Examples
///
/// ```rust
/// use nba_dash::TeamId;
///
/// let hornets = TeamId::new(4);
/// assert_eq!(hornets.as_u32(), 4);
/// assert_eq!(hornets.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Charlotte Hornets, the dashboard's default team.
    pub const HORNETS: TeamId = TeamId(4);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::HORNETS
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        parse_id(s, "team").map(Self)
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        parse_id(s, "player").map(Self)
    }
}

/// Type-safe wrapper for Game IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl GameId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        parse_id(s, "game").map(Self)
    }
}

/// Parse a positive integer ID, reporting which kind of ID was malformed.
fn parse_id<T>(s: &str, kind: &'static str) -> Result<T>
where
    T: FromStr + PartialEq + Default,
{
    match s.trim().parse::<T>() {
        Ok(id) if id != T::default() => Ok(id),
        _ => Err(DashError::InvalidId {
            kind,
            value: s.to_string(),
        }),
    }
}
