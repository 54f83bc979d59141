//! Synthetic statistics for when the stats API cannot supply real data.
//!
//! The free API tier rejects the season-averages and standings endpoints,
//! so the service layer substitutes records from this module. Output is
//! shaped exactly like the upstream records:
//! - `season_averages`: per-player averages drawn from position-aware ranges
//! - `standings`: a team record derived from a single random win total
//!
//! Randomness is injected. The free functions take any `rand::Rng`, and
//! [`FallbackGenerator`] picks between thread-local entropy and a seeded
//! generator for reproducible runs.

pub mod ranges;
pub mod season_averages;
pub mod standings;


use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::bdl::types::{SeasonAverages, Team, TeamStanding};
use crate::cli::types::{PlayerId, Position, Season};

pub use ranges::{StatRange, StatRanges};
pub use season_averages::synthesize_player_season_averages;
pub use standings::{standing_from_wins, synthesize_team_standing, StandingSplits, WinLoss};

/// Shared handle to the synthetic data generator.
///
/// Cheap to share across request handlers; the seeded variant serializes
/// draws through a mutex so a given seed always yields the same sequence.
#[derive(Debug, Default)]
pub struct FallbackGenerator {
    seeded: Option<Mutex<StdRng>>,
}

impl FallbackGenerator {
    /// Draw from thread-local entropy.
    pub fn from_entropy() -> Self {
        Self { seeded: None }
    }

    /// Draw from a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded.is_some()
    }

    pub fn season_averages(
        &self,
        player_id: PlayerId,
        position: Position,
        season: Season,
    ) -> SeasonAverages {
        self.with_rng(|rng| synthesize_player_season_averages(rng, player_id, position, season))
    }

    pub fn team_standing(&self, team: &Team, season: Season) -> TeamStanding {
        self.with_rng(|rng| synthesize_team_standing(rng, team, season))
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.seeded {
            Some(rng) => {
                // A panic mid-draw leaves the generator usable
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                draw(&mut *rng)
            }
            None => draw(&mut rand::thread_rng()),
        }
    }
}
