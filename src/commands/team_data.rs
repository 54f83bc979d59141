//! Team list and team dashboard commands

use crate::bdl::http::StatsProvider;
use crate::bdl::types::{Team, TeamData, TeamStanding};
use crate::cli::types::{LeaderStat, Season, TeamId};
use crate::dashboard::leaderboard;
use crate::service::StatsService;
use crate::Result;

use super::render;

/// Handle `get teams`
pub async fn handle_teams<P: StatsProvider>(service: &StatsService<P>, as_json: bool) -> Result<String> {
    let teams = service.all_teams().await?;
    render(&teams[..], as_json, format_teams)
}

/// Handle `get team-stats`
pub async fn handle_team_stats<P: StatsProvider>(
    service: &StatsService<P>,
    team_id: TeamId,
    season: Season,
    stat: LeaderStat,
    as_json: bool,
) -> Result<String> {
    let data = service.team_overview(team_id, season).await?;
    render(&data, as_json, |data| format_team_overview(data, season, stat))
}

pub fn format_teams(teams: &[Team]) -> String {
    let mut lines = vec![format!(
        "{:>3}  {:<4} {:<26} {:<5} {}",
        "ID", "ABBR", "TEAM", "CONF", "DIVISION"
    )];
    lines.extend(teams.iter().map(|t| {
        format!(
            "{:>3}  {:<4} {:<26} {:<5} {}",
            t.id.as_u32(),
            t.abbreviation,
            t.full_name,
            t.conference,
            t.division
        )
    }));
    lines.join("\n")
}

pub fn format_standing(standing: &TeamStanding) -> String {
    format!(
        "{}-{}  home {}  road {}  conf {} (#{})  div {} (#{})",
        standing.wins,
        standing.losses,
        standing.home_record,
        standing.road_record,
        standing.conference_record,
        standing.conference_rank,
        standing.division_record,
        standing.division_rank,
    )
}

pub fn format_team_overview(data: &TeamData, season: Season, stat: LeaderStat) -> String {
    let mut lines = vec![format!("{} ({})", data.team.full_name, season.label())];
    match &data.team_standing {
        Some(standing) => lines.push(format_standing(standing)),
        None => lines.push("standing unavailable".to_string()),
    }

    lines.push(String::new());
    lines.push(format!("Top 5 by {}", stat.label()));
    for row in leaderboard(&data.players, stat) {
        lines.push(format!(
            "{:>2}. {:<24} {:<4} {:>7}",
            row.rank, row.name, row.position, row.display
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{:<24} {:<4} {:>3} {:>6} {:>5} {:>5} {:>5} {:>6} {:>6}",
        "PLAYER", "POS", "GP", "MIN", "PTS", "REB", "AST", "FG%", "3P%"
    ));
    for player in &data.players {
        match &player.stats {
            Some(s) => lines.push(format!(
                "{:<24} {:<4} {:>3} {:>6} {:>5.1} {:>5.1} {:>5.1} {:>6.1} {:>6.1}",
                player.name,
                player.position,
                s.games_played,
                s.min,
                s.pts,
                s.reb,
                s.ast,
                s.fg_pct * 100.0,
                s.fg3_pct * 100.0,
            )),
            None => lines.push(format!("{:<24} {:<4} -", player.name, player.position)),
        }
    }
    lines.join("\n")
}
