//! Single player command

use serde::Serialize;

use crate::bdl::http::StatsProvider;
use crate::bdl::types::{Player, SeasonAverages};
use crate::cli::types::{PlayerId, Season};
use crate::service::StatsService;
use crate::Result;

use super::render;

#[derive(Debug, Serialize)]
pub struct PlayerReport {
    pub player: Player,
    pub stats: SeasonAverages,
}

/// Handle `get player`
pub async fn handle_player<P: StatsProvider>(
    service: &StatsService<P>,
    player_id: PlayerId,
    season: Season,
    as_json: bool,
) -> Result<String> {
    let player = service.player(player_id).await?;
    let stats = service.player_season_averages(player_id, season).await?;
    render(&PlayerReport { player, stats }, as_json, format_player_report)
}

pub fn format_averages(s: &SeasonAverages) -> String {
    [
        format!("Season  {}", s.season.label()),
        format!("GP      {}", s.games_played),
        format!("MIN     {}", s.min),
        format!("PTS     {:.1}", s.pts),
        format!("REB     {:.1}", s.reb),
        format!("AST     {:.1}", s.ast),
        format!("STL     {:.1}", s.stl),
        format!("BLK     {:.1}", s.blk),
        format!("FG%     {:.1}", s.fg_pct * 100.0),
        format!("3P%     {:.1}", s.fg3_pct * 100.0),
        format!("FT%     {:.1}", s.ft_pct * 100.0),
    ]
    .join("\n")
}

pub fn format_player_report(report: &PlayerReport) -> String {
    let p = &report.player;
    let position = if p.position.is_empty() { "N/A" } else { &p.position };
    let mut header = format!("{} ({}, {})", p.full_name(), position, p.team.abbreviation);
    if let Some(number) = &p.jersey_number {
        header.push_str(&format!(" #{number}"));
    }
    format!("{header}\n{}", format_averages(&report.stats))
}
