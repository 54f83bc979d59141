//! HTTP client for the balldontlie NBA API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{DataEnvelope, Game, Page, Player, SeasonAverages, Team, TeamStanding};
use crate::cli::types::{GameId, PlayerId, Season, TeamId};
use crate::Result;

#[cfg(test)]
mod tests;

/// Base path for the balldontlie v1 API.
pub const BDL_BASE_URL: &str = "https://api.balldontlie.io/v1";

/// Page size used when the caller does not pick one.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Page size for roster lookups; one page covers any NBA roster.
pub const ROSTER_PER_PAGE: u32 = 100;

/// Filters for `/games`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesQuery {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
    pub dates: Vec<String>,
    pub seasons: Vec<Season>,
    pub team_ids: Vec<TeamId>,
    pub postseason: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl GamesQuery {
    pub fn for_season(season: Season) -> Self {
        Self {
            seasons: vec![season],
            ..Self::default()
        }
    }

    pub fn with_team(mut self, team_id: Option<TeamId>) -> Self {
        self.team_ids = team_id.into_iter().collect();
        self
    }

    /// Flatten into query pairs, using `name[]` for repeated filters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![(
            "per_page",
            self.per_page.unwrap_or(DEFAULT_PER_PAGE).to_string(),
        )];
        if let Some(cursor) = self.cursor {
            params.push(("cursor", cursor.to_string()));
        }
        params.extend(self.dates.iter().map(|d| ("dates[]", d.clone())));
        params.extend(self.seasons.iter().map(|s| ("seasons[]", s.to_string())));
        params.extend(self.team_ids.iter().map(|t| ("team_ids[]", t.to_string())));
        if let Some(postseason) = self.postseason {
            params.push(("postseason", postseason.to_string()));
        }
        if let Some(start) = &self.start_date {
            params.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            params.push(("end_date", end.clone()));
        }
        params
    }
}

/// Source of NBA data consumed by the service layer.
///
/// [`BdlClient`] talks to the real API; tests plug in canned providers.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn teams(&self) -> Result<Vec<Team>>;
    async fn team(&self, team_id: TeamId) -> Result<Team>;
    async fn player(&self, player_id: PlayerId) -> Result<Player>;
    async fn team_players(&self, team_id: TeamId) -> Result<Vec<Player>>;
    async fn season_averages(&self, player_id: PlayerId, season: Season)
        -> Result<Vec<SeasonAverages>>;
    async fn games(&self, query: &GamesQuery) -> Result<Page<Game>>;
    async fn game(&self, game_id: GameId) -> Result<Game>;
    async fn standings(&self, season: Season) -> Result<Vec<TeamStanding>>;
}

/// Build the default headers: JSON accept plus the API key, when one is set.
pub fn common_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if !api_key.is_empty() {
        headers.insert(AUTHORIZATION, HeaderValue::from_str(api_key)?);
    }
    Ok(headers)
}

/// balldontlie API client.
#[derive(Debug, Clone)]
pub struct BdlClient {
    http: Client,
    base_url: String,
}

impl BdlClient {
    pub fn new(api_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("nba-dash/", env!("CARGO_PKG_VERSION")))
            .default_headers(common_headers(api_key)?)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(format!("{}{}", self.base_url, path))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        debug!(url = %request.url(), "stats api request");
        let value = self
            .http
            .execute(request)
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    }

    async fn fetch_data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let envelope: DataEnvelope<T> = self.send_json(builder).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl StatsProvider for BdlClient {
    async fn teams(&self) -> Result<Vec<Team>> {
        self.fetch_data(self.get("/teams")).await
    }

    async fn team(&self, team_id: TeamId) -> Result<Team> {
        self.fetch_data(self.get(&format!("/teams/{team_id}"))).await
    }

    async fn player(&self, player_id: PlayerId) -> Result<Player> {
        self.fetch_data(self.get(&format!("/players/{player_id}")))
            .await
    }

    async fn team_players(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let params = [
            ("team_ids[]", team_id.to_string()),
            ("per_page", ROSTER_PER_PAGE.to_string()),
        ];
        self.fetch_data(self.get("/players").query(&params)).await
    }

    async fn season_averages(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Vec<SeasonAverages>> {
        let params = [
            ("season", season.to_string()),
            ("player_id", player_id.to_string()),
        ];
        self.fetch_data(self.get("/season_averages").query(&params))
            .await
    }

    async fn games(&self, query: &GamesQuery) -> Result<Page<Game>> {
        self.send_json(self.get("/games").query(&query.to_params()))
            .await
    }

    async fn game(&self, game_id: GameId) -> Result<Game> {
        self.fetch_data(self.get(&format!("/games/{game_id}"))).await
    }

    async fn standings(&self, season: Season) -> Result<Vec<TeamStanding>> {
        let params = [("season", season.to_string())];
        self.fetch_data(self.get("/standings").query(&params)).await
    }
}
