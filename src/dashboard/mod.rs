//! Data behind the dashboard's table and chart widgets.
//!
//! Everything here is a pure function of a team's [`PlayerWithStats`] list,
//! so the same series feed the JSON chart endpoint and the CLI tables.

pub mod charts;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::bdl::types::PlayerWithStats;
use crate::cli::types::{LeaderStat, PlayerId};

pub use charts::{
    filter_games_by_status, leaderboard, performance_radar, points_distribution,
    position_color, shooting_efficiency, short_name, ChartData, Dataset, LeaderboardRow,
};

/// All widget series for one team page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub stat: LeaderStat,
    pub leaderboard: Vec<LeaderboardRow>,
    pub points_distribution: ChartData,
    pub shooting_efficiency: ChartData,
    pub performance_radar: ChartData,
}

impl DashboardCharts {
    pub fn build(players: &[PlayerWithStats], stat: LeaderStat, compare: &[PlayerId]) -> Self {
        Self {
            stat,
            leaderboard: leaderboard(players, stat),
            points_distribution: points_distribution(players),
            shooting_efficiency: shooting_efficiency(players),
            performance_radar: performance_radar(players, compare),
        }
    }
}
