//! Route handlers.
//!
//! Query parameters arrive as raw strings so malformed values produce the
//! API's own 400 envelope rather than the extractor's plain-text rejection.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;

use super::error::ApiError;
use super::AppState;
use crate::bdl::http::{GamesQuery, StatsProvider};
use crate::cli::types::{GameId, LeaderStat, PlayerId, Season, TeamId};
use crate::dashboard::charts::MAX_RADAR_PLAYERS;
use crate::dashboard::{filter_games_by_status, DashboardCharts};

type ApiResult = Result<Json<Value>, ApiError>;

/// Parse an optional raw parameter, falling back to `default` when absent.
fn parse_or<T: FromStr>(raw: Option<&str>, default: T, invalid: &str) -> Result<T, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse().map_err(|_| ApiError::bad_request(invalid)),
        None => Ok(default),
    }
}

fn parse_opt<T: FromStr>(raw: Option<&str>, invalid: &str) -> Result<Option<T>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ApiError::bad_request(invalid)),
        None => Ok(None),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    #[serde(rename = "teamId")]
    pub team_id: Option<String>,
    pub season: Option<String>,
    pub stat: Option<String>,
    pub compare: Option<String>,
}

impl TeamParams {
    fn team_id(&self) -> Result<TeamId, ApiError> {
        parse_or(self.team_id.as_deref(), TeamId::default(), "Invalid team ID")
    }

    fn season(&self) -> Result<Season, ApiError> {
        parse_or(self.season.as_deref(), Season::default(), "Invalid season")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GamesParams {
    pub page: Option<String>,
    pub cursor: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
    pub season: Option<String>,
    #[serde(rename = "teamId")]
    pub team_id: Option<String>,
    pub postseason: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonParams {
    pub season: Option<String>,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn teams<P: StatsProvider>(State(state): State<AppState<P>>) -> ApiResult {
    let teams = state
        .service
        .all_teams()
        .await
        .map_err(|e| ApiError::fetch("teams", e))?;
    Ok(Json(json!({ "success": true, "data": teams })))
}

pub async fn team_stats<P: StatsProvider>(
    State(state): State<AppState<P>>,
    Query(params): Query<TeamParams>,
) -> ApiResult {
    let team_id = params.team_id()?;
    let season = params.season()?;
    team_stats_for(&state, team_id, season).await
}

/// Legacy alias pinned to the Charlotte Hornets.
pub async fn hornets_stats<P: StatsProvider>(
    State(state): State<AppState<P>>,
    Query(params): Query<SeasonParams>,
) -> ApiResult {
    let season = parse_or(params.season.as_deref(), Season::default(), "Invalid season")?;
    team_stats_for(&state, TeamId::HORNETS, season).await
}

async fn team_stats_for<P: StatsProvider>(
    state: &AppState<P>,
    team_id: TeamId,
    season: Season,
) -> ApiResult {
    let data = state
        .service
        .team_overview(team_id, season)
        .await
        .map_err(|e| ApiError::fetch("team", e))?;
    Ok(Json(json!({
        "success": true,
        "data": data,
        "teamId": team_id,
        "season": season,
    })))
}

pub async fn team_charts<P: StatsProvider>(
    State(state): State<AppState<P>>,
    Query(params): Query<TeamParams>,
) -> ApiResult {
    let team_id = params.team_id()?;
    let season = params.season()?;
    let stat = parse_or(params.stat.as_deref(), LeaderStat::default(), "Invalid stat")?;
    let compare = parse_compare(params.compare.as_deref())?;

    let data = state
        .service
        .team_overview(team_id, season)
        .await
        .map_err(|e| ApiError::fetch("team", e))?;
    let charts = DashboardCharts::build(&data.players, stat, &compare);

    Ok(Json(json!({
        "success": true,
        "data": charts,
        "teamId": team_id,
        "season": season,
    })))
}

/// Comma separated player ids, at most [`MAX_RADAR_PLAYERS`].
fn parse_compare(raw: Option<&str>) -> Result<Vec<PlayerId>, ApiError> {
    let ids = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<PlayerId>().map_err(|_| ApiError::bad_request("Invalid player ID")))
        .collect::<Result<Vec<_>, _>>()?;
    if ids.len() > MAX_RADAR_PLAYERS {
        return Err(ApiError::bad_request(format!(
            "At most {MAX_RADAR_PLAYERS} players can be compared"
        )));
    }
    Ok(ids)
}

pub async fn player<P: StatsProvider>(
    State(state): State<AppState<P>>,
    Path(raw_id): Path<String>,
    Query(params): Query<SeasonParams>,
) -> ApiResult {
    let player_id: PlayerId = raw_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid player ID"))?;
    let season = parse_or(params.season.as_deref(), Season::default(), "Invalid season")?;

    let player = state
        .service
        .player(player_id)
        .await
        .map_err(|e| ApiError::fetch("player", e))?;
    let stats = state
        .service
        .player_season_averages(player_id, season)
        .await
        .map_err(|e| ApiError::fetch("player", e))?;

    Ok(Json(json!({
        "success": true,
        "data": { "player": player, "stats": stats },
        "season": season,
    })))
}

pub async fn games<P: StatsProvider>(
    State(state): State<AppState<P>>,
    Query(params): Query<GamesParams>,
) -> ApiResult {
    let page: u32 = parse_or(params.page.as_deref(), 1, "Invalid page")?;
    if page == 0 {
        return Err(ApiError::bad_request("Invalid page"));
    }
    let season = parse_or(params.season.as_deref(), Season::default(), "Invalid season")?;
    let query = GamesQuery {
        cursor: parse_opt(params.cursor.as_deref(), "Invalid cursor")?,
        per_page: Some(parse_or(
            params.per_page.as_deref(),
            crate::bdl::http::DEFAULT_PER_PAGE,
            "Invalid perPage",
        )?),
        postseason: parse_opt(params.postseason.as_deref(), "Invalid postseason")?,
        start_date: params.start_date.clone().filter(|d| !d.trim().is_empty()),
        end_date: params.end_date.clone().filter(|d| !d.trim().is_empty()),
        ..GamesQuery::for_season(season)
    }
    .with_team(parse_opt(params.team_id.as_deref(), "Invalid team ID")?);

    let page_data = state
        .service
        .games(&query)
        .await
        .map_err(|e| ApiError::fetch("games", e))?;
    let games = match params.status.as_deref() {
        Some(status) => filter_games_by_status(page_data.data, status),
        None => page_data.data,
    };

    Ok(Json(json!({
        "success": true,
        "data": games,
        "meta": page_data.meta,
        "page": page,
        "season": season,
    })))
}

pub async fn game<P: StatsProvider>(
    State(state): State<AppState<P>>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let game_id: GameId = raw_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid game ID"))?;
    let game = state
        .service
        .game(game_id)
        .await
        .map_err(|e| ApiError::fetch("game", e))?;
    Ok(Json(json!({ "success": true, "data": game })))
}
