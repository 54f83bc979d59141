//! Direct access to the synthetic data generator

use crate::bdl::types::{Team, TeamStanding};
use crate::cli::types::{PlayerId, Position, Season, TeamId};
use crate::fallback::{standing_from_wins, FallbackGenerator};
use crate::Result;

use super::player_data::format_averages;
use super::render;
use super::team_data::format_standing;

/// Handle `mock player`
pub fn handle_mock_player(
    generator: &FallbackGenerator,
    player_id: PlayerId,
    position: Position,
    season: Season,
    as_json: bool,
) -> Result<String> {
    let averages = generator.season_averages(player_id, position, season);
    render(&averages, as_json, |averages| {
        format!("Player {player_id} ({position})\n{}", format_averages(averages))
    })
}

/// Handle `mock standing`; a fixed `wins` bypasses the random draw.
pub fn handle_mock_standing(
    generator: &FallbackGenerator,
    team_id: TeamId,
    season: Season,
    wins: Option<u32>,
    as_json: bool,
) -> Result<String> {
    let team = placeholder_team(team_id);
    let standing: TeamStanding = match wins {
        Some(wins) => standing_from_wins(&team, season, wins),
        None => generator.team_standing(&team, season),
    };
    render(&standing, as_json, |standing| {
        format!("{} ({})\n{}", team.full_name, season.label(), format_standing(standing))
    })
}

/// Team identity for offline generation; only the id is known.
fn placeholder_team(team_id: TeamId) -> Team {
    Team {
        id: team_id,
        conference: String::new(),
        division: String::new(),
        city: String::new(),
        name: String::new(),
        full_name: format!("Team {team_id}"),
        abbreviation: String::new(),
    }
}
