//! Stat selectors shared by the CLI and the chart endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bdl::types::SeasonAverages;
use crate::error::DashError;

/// Statistic a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderStat {
    /// Points per game
    #[default]
    Pts,
    /// Rebounds per game
    Reb,
    /// Assists per game
    Ast,
    /// Field goal percentage
    #[value(name = "fg_pct")]
    FgPct,
    /// Minutes per game (whole minutes)
    Min,
}

impl LeaderStat {
    pub const ALL: [LeaderStat; 5] = [
        LeaderStat::Pts,
        LeaderStat::Reb,
        LeaderStat::Ast,
        LeaderStat::FgPct,
        LeaderStat::Min,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LeaderStat::Pts => "pts",
            LeaderStat::Reb => "reb",
            LeaderStat::Ast => "ast",
            LeaderStat::FgPct => "fg_pct",
            LeaderStat::Min => "min",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaderStat::Pts => "Points",
            LeaderStat::Reb => "Rebounds",
            LeaderStat::Ast => "Assists",
            LeaderStat::FgPct => "Field Goal %",
            LeaderStat::Min => "Minutes",
        }
    }

    /// Sort key for `averages`. Minutes compare on the whole-minute part only.
    pub fn value(&self, averages: &SeasonAverages) -> f64 {
        match self {
            LeaderStat::Pts => averages.pts,
            LeaderStat::Reb => averages.reb,
            LeaderStat::Ast => averages.ast,
            LeaderStat::FgPct => averages.fg_pct,
            LeaderStat::Min => f64::from(averages.minutes()),
        }
    }

    /// Display form used in leaderboard tables.
    pub fn format(&self, averages: &SeasonAverages) -> String {
        match self {
            LeaderStat::FgPct => format!("{:.1}%", averages.fg_pct * 100.0),
            LeaderStat::Min => averages.min.clone(),
            _ => format!("{:.1}", self.value(averages)),
        }
    }
}

impl fmt::Display for LeaderStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for LeaderStat {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        LeaderStat::ALL
            .into_iter()
            .find(|stat| stat.key() == key)
            .ok_or_else(|| DashError::InvalidParam {
                name: "stat",
                value: s.to_string(),
            })
    }
}
