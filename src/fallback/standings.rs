//! Synthetic team standings derived from a single win total.

use rand::Rng;
use std::fmt;
use std::ops::Range;

use crate::bdl::types::{Team, TeamStanding};
use crate::cli::types::Season;

pub const GAMES_PER_SEASON: u32 = 82;
pub const HOME_GAMES: u32 = GAMES_PER_SEASON / 2;
pub const CONFERENCE_GAMES: u32 = 52;
pub const DIVISION_GAMES: u32 = 16;

/// Win totals are drawn from this half-open range.
pub const WINS: Range<u32> = 20..61;

const CONFERENCE_RANKS: (i64, i64) = (1, 15);
const DIVISION_RANKS: (i64, i64) = (1, 5);

/// A win-loss pair, displayed as `W-L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

impl fmt::Display for WinLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Every split of a season record, derived from the win total alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingSplits {
    pub overall: WinLoss,
    pub home: WinLoss,
    pub road: WinLoss,
    pub conference: WinLoss,
    pub division: WinLoss,
    pub conference_rank: u32,
    pub division_rank: u32,
}

impl StandingSplits {
    /// Derive all splits from `wins`.
    ///
    /// The fixed-ratio splits hold for any win total in [`WINS`]; totals
    /// above 82 are capped and out-of-range splits saturate at zero.
    pub fn from_wins(wins: u32) -> Self {
        let wins = wins.min(GAMES_PER_SEASON);
        let losses = GAMES_PER_SEASON - wins;

        // floor(wins * 0.6)
        let home_wins = wins * 3 / 5;
        let home_losses = HOME_GAMES.saturating_sub(home_wins);
        let road_wins = wins - home_wins;
        let road_losses = losses.saturating_sub(home_losses);

        let conference_wins = wins * CONFERENCE_GAMES / GAMES_PER_SEASON;
        let division_wins = wins * DIVISION_GAMES / GAMES_PER_SEASON;

        Self {
            overall: WinLoss::new(wins, losses),
            home: WinLoss::new(home_wins, home_losses),
            road: WinLoss::new(road_wins, road_losses),
            conference: WinLoss::new(conference_wins, CONFERENCE_GAMES - conference_wins),
            division: WinLoss::new(division_wins, DIVISION_GAMES - division_wins),
            conference_rank: step_rank(16, wins / 4, CONFERENCE_RANKS),
            division_rank: step_rank(6, wins / 12, DIVISION_RANKS),
        }
    }
}

/// `clamp(top - steps, lo, hi)`; more wins never yields a worse rank.
fn step_rank(top: i64, steps: u32, (lo, hi): (i64, i64)) -> u32 {
    (top - i64::from(steps)).clamp(lo, hi) as u32
}

/// Build a standing for `team` with a fixed win total.
pub fn standing_from_wins(team: &Team, season: Season, wins: u32) -> TeamStanding {
    let splits = StandingSplits::from_wins(wins);
    TeamStanding {
        team: team.clone(),
        conference_record: splits.conference.to_string(),
        conference_rank: splits.conference_rank,
        division_record: splits.division.to_string(),
        division_rank: splits.division_rank,
        wins: splits.overall.wins,
        losses: splits.overall.losses,
        home_record: splits.home.to_string(),
        road_record: splits.road.to_string(),
        season,
    }
}

/// Draw a win total and derive a plausible standing for `team`.
pub fn synthesize_team_standing<R: Rng + ?Sized>(
    rng: &mut R,
    team: &Team,
    season: Season,
) -> TeamStanding {
    let wins = rng.gen_range(WINS);
    standing_from_wins(team, season, wins)
}

/// Parse a `W-L` record string back into its parts.
pub fn parse_record(record: &str) -> Option<WinLoss> {
    let (w, l) = record.split_once('-')?;
    Some(WinLoss::new(w.trim().parse().ok()?, l.trim().parse().ok()?))
}
