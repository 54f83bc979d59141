//! Chart and table derivations over a team's roster stats.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::bdl::types::{Game, PlayerWithStats, SeasonAverages};
use crate::cli::types::{LeaderStat, PlayerId, Position};

pub const LEADERBOARD_SIZE: usize = 5;
pub const TOP_SHOOTERS: usize = 8;
pub const MAX_RADAR_PLAYERS: usize = 3;

pub const BLUE: &str = "rgb(59, 130, 246)";
pub const GREEN: &str = "rgb(16, 185, 129)";
pub const ORANGE: &str = "rgb(245, 158, 11)";
pub const GRAY: &str = "rgb(107, 114, 128)";

const RADAR_COLORS: [&str; MAX_RADAR_PLAYERS] = [BLUE, GREEN, ORANGE];

/// Radar axes as `(label, stat key, value at 100%)`.
pub const RADAR_AXES: [(&str, &str, f64); 6] = [
    ("Points", "pts", 30.0),
    ("Rebounds", "reb", 15.0),
    ("Assists", "ast", 10.0),
    ("Steals", "stl", 3.0),
    ("Blocks", "blk", 3.0),
    ("FG%", "fg_pct", 0.6),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub value: f64,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One colour per point, or a single colour for the whole series
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Bar colour for a raw position code.
pub fn position_color(position: &str) -> &'static str {
    match Position::from_code(position) {
        Position::Guard => BLUE,
        Position::Forward => GREEN,
        Position::Center => ORANGE,
        Position::Unknown => GRAY,
    }
}

/// Short chart label: the second word of the name, or the whole name.
pub fn short_name(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().unwrap_or_default();
    words.next().unwrap_or(first).to_string()
}

fn with_stats(players: &[PlayerWithStats]) -> Vec<(&PlayerWithStats, &SeasonAverages)> {
    players
        .iter()
        .filter_map(|p| p.stats.as_ref().map(|s| (p, s)))
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Top five players by `stat`, ties kept in roster order.
pub fn leaderboard(players: &[PlayerWithStats], stat: LeaderStat) -> Vec<LeaderboardRow> {
    let mut ranked = with_stats(players);
    ranked.sort_by(|(_, a), (_, b)| descending(stat.value(a), stat.value(b)));

    ranked
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, (player, stats))| LeaderboardRow {
            rank: i + 1,
            id: player.id,
            name: player.name.clone(),
            position: player.position.clone(),
            value: stat.value(stats),
            display: stat.format(stats),
        })
        .collect()
}

pub fn points_distribution(players: &[PlayerWithStats]) -> ChartData {
    let mut ranked = with_stats(players);
    ranked.sort_by(|(_, a), (_, b)| descending(a.pts, b.pts));

    ChartData {
        labels: ranked.iter().map(|(p, _)| short_name(&p.name)).collect(),
        datasets: vec![Dataset {
            label: "Points Per Game".to_string(),
            data: ranked.iter().map(|(_, s)| s.pts).collect(),
            colors: ranked
                .iter()
                .map(|(p, _)| position_color(&p.position).to_string())
                .collect(),
        }],
    }
}

/// Best eight field goal shooters, percentages scaled to `0..=100`.
pub fn shooting_efficiency(players: &[PlayerWithStats]) -> ChartData {
    let mut ranked: Vec<_> = with_stats(players)
        .into_iter()
        .filter(|(_, s)| s.fg_pct != 0.0 || s.fg3_pct != 0.0)
        .collect();
    ranked.sort_by(|(_, a), (_, b)| descending(a.fg_pct, b.fg_pct));
    ranked.truncate(TOP_SHOOTERS);

    ChartData {
        labels: ranked.iter().map(|(p, _)| short_name(&p.name)).collect(),
        datasets: vec![
            Dataset {
                label: "Field Goal %".to_string(),
                data: ranked.iter().map(|(_, s)| s.fg_pct * 100.0).collect(),
                colors: vec![BLUE.to_string()],
            },
            Dataset {
                label: "3-Point %".to_string(),
                data: ranked.iter().map(|(_, s)| s.fg3_pct * 100.0).collect(),
                colors: vec![GREEN.to_string()],
            },
        ],
    }
}

fn radar_value(stats: &SeasonAverages, key: &str) -> f64 {
    match key {
        "pts" => stats.pts,
        "reb" => stats.reb,
        "ast" => stats.ast,
        "stl" => stats.stl,
        "blk" => stats.blk,
        "fg_pct" => stats.fg_pct,
        _ => 0.0,
    }
}

/// Radar comparison of up to three `selected` players.
///
/// Only the first three distinct selections count. Players appear in roster
/// order; unknown ids and players without stats are skipped.
pub fn performance_radar(players: &[PlayerWithStats], selected: &[PlayerId]) -> ChartData {
    let mut picks: Vec<PlayerId> = Vec::with_capacity(MAX_RADAR_PLAYERS);
    for id in selected {
        if picks.len() == MAX_RADAR_PLAYERS {
            break;
        }
        if !picks.contains(id) {
            picks.push(*id);
        }
    }

    let datasets = with_stats(players)
        .into_iter()
        .filter(|(p, _)| picks.contains(&p.id))
        .zip(RADAR_COLORS)
        .map(|((player, stats), color)| Dataset {
            label: player.name.clone(),
            data: RADAR_AXES
                .iter()
                .map(|(_, key, max)| radar_value(stats, key) / max * 100.0)
                .collect(),
            colors: vec![color.to_string()],
        })
        .collect();

    ChartData {
        labels: RADAR_AXES.iter().map(|(label, _, _)| label.to_string()).collect(),
        datasets,
    }
}

/// Games whose status contains `status`, ignoring case. Blank matches all.
pub fn filter_games_by_status(games: Vec<Game>, status: &str) -> Vec<Game> {
    let needle = status.trim().to_lowercase();
    if needle.is_empty() {
        return games;
    }
    games
        .into_iter()
        .filter(|g| g.status.to_lowercase().contains(&needle))
        .collect()
}
