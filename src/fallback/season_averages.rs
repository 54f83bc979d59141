//! Synthetic per-player season averages.

use rand::Rng;
use tracing::debug;

use super::ranges::{StatRanges, GAMES_PLAYED, MINUTES, SECONDS};
use crate::bdl::types::SeasonAverages;
use crate::cli::types::{PlayerId, Position, Season};

/// Decimal places for counting stats (points, rebounds, ...).
const COUNT_DECIMALS: i32 = 1;
/// Decimal places for shooting percentages.
const PCT_DECIMALS: i32 = 3;

/// Produce plausible season averages for a player at `position`.
///
/// Every statistic is drawn independently and uniformly from its
/// position-adjusted range, so no correlation between fields is implied.
/// Unknown positions use the base ranges.
pub fn synthesize_player_season_averages<R: Rng + ?Sized>(
    rng: &mut R,
    player_id: PlayerId,
    position: Position,
    season: Season,
) -> SeasonAverages {
    if !position.is_known() {
        debug!(%player_id, "no position profile, using base stat ranges");
    }
    let ranges = StatRanges::for_position(position);

    let games_played = rng.gen_range(GAMES_PLAYED);
    let minutes = rng.gen_range(MINUTES);
    let seconds = rng.gen_range(SECONDS);

    SeasonAverages {
        player_id,
        season,
        games_played,
        min: format_clock(minutes, seconds),
        pts: ranges.pts.sample(rng, COUNT_DECIMALS),
        reb: ranges.reb.sample(rng, COUNT_DECIMALS),
        ast: ranges.ast.sample(rng, COUNT_DECIMALS),
        stl: ranges.stl.sample(rng, COUNT_DECIMALS),
        blk: ranges.blk.sample(rng, COUNT_DECIMALS),
        fg_pct: ranges.fg_pct.sample(rng, PCT_DECIMALS),
        fg3_pct: ranges.fg3_pct.sample(rng, PCT_DECIMALS),
        ft_pct: ranges.ft_pct.sample(rng, PCT_DECIMALS),
    }
}

/// `MM:SS` with zero-padded seconds; minutes are not padded.
pub fn format_clock(minutes: u32, seconds: u32) -> String {
    format!("{minutes}:{seconds:02}")
}
