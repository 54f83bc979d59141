//! Shared fixtures for unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::bdl::http::{GamesQuery, StatsProvider};
use crate::bdl::types::{Game, Meta, Page, Player, SeasonAverages, Team, TeamStanding};
use crate::cli::types::{GameId, PlayerId, Season, TeamId};
use crate::DashError;

pub fn team(id: u32, abbreviation: &str) -> Team {
    Team {
        id: TeamId::new(id),
        conference: "East".to_string(),
        division: "Southeast".to_string(),
        city: "Charlotte".to_string(),
        name: "Hornets".to_string(),
        full_name: "Charlotte Hornets".to_string(),
        abbreviation: abbreviation.to_string(),
    }
}

pub fn player(id: u64, first: &str, last: &str, position: &str) -> Player {
    Player {
        id: PlayerId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: position.to_string(),
        height: Some("6-7".to_string()),
        weight: None,
        jersey_number: Some("1".to_string()),
        team: team(4, "CHA"),
    }
}

pub fn game(id: u64, status: &str) -> Game {
    Game {
        id: GameId::new(id),
        date: "2024-03-01".to_string(),
        season: Season::new(2023),
        status: status.to_string(),
        period: 4,
        time: None,
        postseason: false,
        home_team_score: 110,
        visitor_team_score: 104,
        home_team: team(4, "CHA"),
        visitor_team: team(1, "ATL"),
    }
}

/// Canned provider; `broken` makes every call fail.
#[derive(Default)]
pub struct CannedProvider {
    pub broken: bool,
    pub last_games_query: Mutex<Option<GamesQuery>>,
}

impl CannedProvider {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    fn check(&self) -> crate::Result<()> {
        if self.broken {
            Err(DashError::NoData)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StatsProvider for CannedProvider {
    async fn teams(&self) -> crate::Result<Vec<Team>> {
        self.check()?;
        Ok(vec![team(1, "ATL"), team(4, "CHA")])
    }

    async fn team(&self, team_id: TeamId) -> crate::Result<Team> {
        self.check()?;
        Ok(team(team_id.as_u32(), "CHA"))
    }

    async fn player(&self, player_id: PlayerId) -> crate::Result<Player> {
        self.check()?;
        Ok(player(player_id.as_u64(), "LaMelo", "Ball", "G"))
    }

    async fn team_players(&self, _team_id: TeamId) -> crate::Result<Vec<Player>> {
        self.check()?;
        Ok(vec![
            player(1, "LaMelo", "Ball", "G"),
            player(2, "Miles", "Bridges", "F"),
            player(3, "Mark", "Williams", "C"),
        ])
    }

    async fn season_averages(&self, _: PlayerId, _: Season) -> crate::Result<Vec<SeasonAverages>> {
        // Free tier behaviour
        Err(DashError::NoData)
    }

    async fn games(&self, query: &GamesQuery) -> crate::Result<Page<Game>> {
        self.check()?;
        *self.last_games_query.lock().unwrap() = Some(query.clone());
        Ok(Page {
            data: vec![game(10, "Final"), game(11, "7:00 pm ET"), game(12, "Final/OT")],
            meta: Meta {
                next_cursor: Some(12),
                per_page: query.per_page,
            },
        })
    }

    async fn game(&self, game_id: GameId) -> crate::Result<Game> {
        self.check()?;
        Ok(game(game_id.as_u64(), "Final"))
    }

    async fn standings(&self, _: Season) -> crate::Result<Vec<TeamStanding>> {
        Err(DashError::NoData)
    }
}
