use crate::cli::types::{GameId, PlayerId, Season, TeamId};
use serde::{Deserialize, Serialize};


/// Team identity as returned by `/teams`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// Player record from `/players`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    /// Raw API position code (`G`, `F`, `C`, `G-F`, ... or empty)
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<String>,
    pub team: Team,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Per-game season averages for one player.
///
/// Produced either by `/season_averages` or by the fallback generator; both
/// paths yield exactly this shape. Percentages are fractions in `0..=1`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonAverages {
    pub player_id: PlayerId,
    pub season: Season,
    pub games_played: u32,
    /// Average playing time formatted `MM:SS`
    pub min: String,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

impl SeasonAverages {
    /// Whole minutes from the `MM:SS` clock string, `0` when unparseable.
    pub fn minutes(&self) -> u32 {
        self.min
            .split(':')
            .next()
            .and_then(|m| m.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Conference/division standing for one team.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamStanding {
    pub team: Team,
    pub conference_record: String,
    pub conference_rank: u32,
    pub division_record: String,
    pub division_rank: u32,
    pub wins: u32,
    pub losses: u32,
    pub home_record: String,
    pub road_record: String,
    pub season: Season,
}

/// Game record from `/games`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Game {
    pub id: GameId,
    pub date: String,
    pub season: Season,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub period: u32,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub postseason: bool,
    #[serde(default)]
    pub home_team_score: u32,
    #[serde(default)]
    pub visitor_team_score: u32,
    pub home_team: Team,
    pub visitor_team: Team,
}

/// Cursor pagination block attached to list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Envelope for single-resource responses: `{"data": {...}}`
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Envelope for list responses: `{"data": [...], "meta": {...}}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A roster entry paired with its season averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerWithStats {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub stats: Option<SeasonAverages>,
}

/// Everything the team dashboard renders for one team and season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    pub players: Vec<PlayerWithStats>,
    #[serde(rename = "teamStanding")]
    pub team_standing: Option<TeamStanding>,
    pub team: Team,
}
