//! Data access layer.
//!
//! Wraps a [`StatsProvider`], substitutes synthetic records from the
//! [`FallbackGenerator`] when the provider fails or comes back empty, and
//! reshapes responses into the records the dashboard renders. Fallbacks are
//! logged but never flagged to callers.

use std::cmp::Ordering;
use tracing::{error, info, warn};

use crate::bdl::http::{GamesQuery, StatsProvider};
use crate::bdl::types::{Game, Page, Player, PlayerWithStats, SeasonAverages, Team, TeamData, TeamStanding};
use crate::cli::types::{GameId, PlayerId, Position, Season, TeamId};
use crate::core::IdentityCache;
use crate::fallback::FallbackGenerator;
use crate::Result;


pub struct StatsService<P> {
    provider: P,
    fallback: FallbackGenerator,
    cache: IdentityCache,
}

impl<P: StatsProvider> StatsService<P> {
    pub fn new(provider: P, fallback: FallbackGenerator, cache_capacity: usize) -> Self {
        Self {
            provider,
            fallback,
            cache: IdentityCache::new(cache_capacity),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &IdentityCache {
        &self.cache
    }

    pub async fn all_teams(&self) -> Result<Vec<Team>> {
        let teams = self.provider.teams().await.inspect_err(|e| {
            error!(error = %e, "error fetching teams");
        })?;
        for team in &teams {
            self.cache.teams.put(team.id, team.clone());
        }
        Ok(teams)
    }

    pub async fn team(&self, team_id: TeamId) -> Result<Team> {
        if let Some(team) = self.cache.teams.get(&team_id) {
            return Ok(team);
        }
        let team = self.provider.team(team_id).await.inspect_err(|e| {
            error!(%team_id, error = %e, "error fetching team");
        })?;
        self.cache.teams.put(team_id, team.clone());
        Ok(team)
    }

    pub async fn player(&self, player_id: PlayerId) -> Result<Player> {
        if let Some(player) = self.cache.players.get(&player_id) {
            return Ok(player);
        }
        let player = self.provider.player(player_id).await.inspect_err(|e| {
            error!(%player_id, error = %e, "error fetching player");
        })?;
        self.cache.players.put(player_id, player.clone());
        Ok(player)
    }

    /// Season averages for one player, synthesized when the API has none.
    ///
    /// Only a failed player lookup on the fallback path surfaces as an error.
    pub async fn player_season_averages(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<SeasonAverages> {
        match self.provider.season_averages(player_id, season).await {
            Ok(mut averages) if !averages.is_empty() => return Ok(averages.swap_remove(0)),
            Ok(_) => info!(%player_id, %season, "no season averages returned, using synthetic stats"),
            Err(e) => info!(%player_id, %season, error = %e, "season averages unavailable, using synthetic stats"),
        }

        let player = self.player(player_id).await?;
        let position = Position::from_code(&player.position);
        Ok(self.fallback.season_averages(player_id, position, season))
    }

    pub async fn games(&self, query: &GamesQuery) -> Result<Page<Game>> {
        self.provider.games(query).await.inspect_err(|e| {
            error!(error = %e, "error fetching games");
        })
    }

    pub async fn game(&self, game_id: GameId) -> Result<Game> {
        self.provider.game(game_id).await.inspect_err(|e| {
            error!(%game_id, error = %e, "error fetching game");
        })
    }

    /// Standing for `team`, synthesized when the standings call fails or is empty.
    ///
    /// A non-empty table that lacks the team yields `None`.
    pub async fn team_standing(&self, team: &Team, season: Season) -> Option<TeamStanding> {
        match self.provider.standings(season).await {
            Ok(standings) if !standings.is_empty() => {
                standings.into_iter().find(|s| s.team.id == team.id)
            }
            Ok(_) => {
                warn!(team_id = %team.id, %season, "standings empty, using synthetic standing");
                Some(self.fallback.team_standing(team, season))
            }
            Err(e) => {
                warn!(team_id = %team.id, %season, error = %e, "standings unavailable, using synthetic standing");
                Some(self.fallback.team_standing(team, season))
            }
        }
    }

    /// Roster, per-player averages and standing for one team.
    ///
    /// Roster averages are always synthetic: one season-averages request per
    /// player is rejected on the free tier.
    pub async fn team_overview(&self, team_id: TeamId, season: Season) -> Result<TeamData> {
        let team = self.team(team_id).await?;

        let roster = self.provider.team_players(team_id).await.inspect_err(|e| {
            error!(%team_id, error = %e, "error fetching roster");
        })?;
        info!(%team_id, players = roster.len(), "fetched roster");
        self.cache.remember_players(&roster);

        let mut players: Vec<PlayerWithStats> = roster
            .iter()
            .map(|player| PlayerWithStats {
                id: player.id,
                name: player.full_name(),
                position: player.position.clone(),
                stats: Some(self.fallback.season_averages(
                    player.id,
                    Position::from_code(&player.position),
                    season,
                )),
            })
            .collect();
        sort_by_points(&mut players);
        info!(%team_id, players = players.len(), "generated synthetic roster stats");

        let team_standing = self.team_standing(&team, season).await;

        Ok(TeamData {
            players,
            team_standing,
            team,
        })
    }

    pub fn fallback(&self) -> &FallbackGenerator {
        &self.fallback
    }
}

/// Highest scorers first; players without stats sink to the bottom.
pub fn sort_by_points(players: &mut [PlayerWithStats]) {
    players.sort_by(|a, b| match (&a.stats, &b.stats) {
        (Some(a), Some(b)) => b.pts.partial_cmp(&a.pts).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
