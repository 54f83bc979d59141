//! Game list and game detail commands

use serde::Serialize;

use crate::bdl::http::{GamesQuery, StatsProvider};
use crate::bdl::types::{Game, Meta};
use crate::cli::types::GameId;
use crate::dashboard::filter_games_by_status;
use crate::service::StatsService;
use crate::Result;

use super::render;

#[derive(Debug, Serialize)]
pub struct GamesReport {
    pub data: Vec<Game>,
    pub meta: Meta,
}

/// Handle `get games`
pub async fn handle_games<P: StatsProvider>(
    service: &StatsService<P>,
    query: &GamesQuery,
    status: Option<&str>,
    as_json: bool,
) -> Result<String> {
    let page = service.games(query).await?;
    let data = match status {
        Some(status) => filter_games_by_status(page.data, status),
        None => page.data,
    };
    let report = GamesReport {
        data,
        meta: page.meta,
    };
    render(&report, as_json, format_games_report)
}

/// Handle `get game`
pub async fn handle_game<P: StatsProvider>(
    service: &StatsService<P>,
    game_id: GameId,
    as_json: bool,
) -> Result<String> {
    let game = service.game(game_id).await?;
    render(&game, as_json, format_game)
}

pub fn format_game(game: &Game) -> String {
    let date = game.date.get(..10).unwrap_or(&game.date);
    let tag = if game.postseason { " (playoffs)" } else { "" };
    format!(
        "{:>8}  {}  {:>3} {:>3} @ {:<3} {:>3}  {}{}",
        game.id.as_u64(),
        date,
        game.visitor_team.abbreviation,
        game.visitor_team_score,
        game.home_team.abbreviation,
        game.home_team_score,
        game.status,
        tag,
    )
}

pub fn format_games_report(report: &GamesReport) -> String {
    if report.data.is_empty() {
        return "No games found".to_string();
    }
    let mut lines: Vec<String> = report.data.iter().map(format_game).collect();
    if let Some(cursor) = report.meta.next_cursor {
        lines.push(format!("next page: --cursor {cursor}"));
    }
    lines.join("\n")
}
