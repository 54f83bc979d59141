//! Position-aware sampling ranges for synthetic season averages.

use rand::Rng;
use std::ops::Range;

use crate::cli::types::Position;

/// Games played is drawn from this half-open range.
pub const GAMES_PLAYED: Range<u32> = 60..82;

/// Whole minutes per game, half-open.
pub const MINUTES: Range<u32> = 12..36;

/// Seconds component of the minutes clock, half-open.
pub const SECONDS: Range<u32> = 0..60;

/// Closed interval `[min, max]` for one statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
}

impl StatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw uniformly from the interval and round to `decimals` places.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, decimals: i32) -> f64 {
        let raw = rng.gen_range(self.min..=self.max);
        round_to(raw, decimals).clamp(self.min, self.max)
    }
}

/// The eight sampled statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRanges {
    pub pts: StatRange,
    pub reb: StatRange,
    pub ast: StatRange,
    pub stl: StatRange,
    pub blk: StatRange,
    pub fg_pct: StatRange,
    pub fg3_pct: StatRange,
    pub ft_pct: StatRange,
}

impl StatRanges {
    /// Ranges used for unknown positions and as the starting point for overrides.
    pub const BASE: StatRanges = StatRanges {
        pts: StatRange::new(5.0, 25.0),
        reb: StatRange::new(1.0, 12.0),
        ast: StatRange::new(0.5, 10.0),
        stl: StatRange::new(0.2, 2.5),
        blk: StatRange::new(0.1, 2.5),
        fg_pct: StatRange::new(0.38, 0.55),
        fg3_pct: StatRange::new(0.28, 0.43),
        ft_pct: StatRange::new(0.65, 0.95),
    };

    /// Base ranges with the overrides for `position` applied.
    ///
    /// Free-throw percentage is never adjusted.
    pub fn for_position(position: Position) -> Self {
        let mut r = Self::BASE;
        match position {
            Position::Guard => {
                r.pts.max = 30.0;
                r.ast.max = 12.0;
                r.reb.max = 6.0;
                r.fg3_pct.max = 0.45;
            }
            Position::Forward => {
                r.pts.max = 27.0;
                r.reb.max = 10.0;
                r.blk.max = 2.0;
            }
            Position::Center => {
                r.pts.min = 8.0;
                r.reb.min = 6.0;
                r.reb.max = 15.0;
                r.blk.max = 3.0;
                r.fg3_pct.max = 0.33;
                r.fg_pct.min = 0.48;
            }
            Position::Unknown => {}
        }
        r
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
