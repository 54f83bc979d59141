//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use types::{GameId, LeaderStat, PlayerId, Position, Season, TeamId};

/// Output switch shared by every `get` subcommand
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of a text table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// List every NBA team.
    Teams {
        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Roster with season averages and the team's standing.
    ///
    /// Roster averages are synthetic; the standing is real when the
    /// standings endpoint is available.
    TeamStats {
        /// Team ID (defaults to the Charlotte Hornets).
        #[clap(long, short, default_value_t = TeamId::default())]
        team_id: TeamId,

        /// Season start year (e.g. 2023 for 2023-24).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Statistic to rank the leaderboard by.
        #[clap(long, value_enum, default_value_t = LeaderStat::default())]
        stat: LeaderStat,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// One player and their season averages.
    Player {
        player_id: PlayerId,

        /// Season start year (e.g. 2023 for 2023-24).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Games for a season, optionally filtered.
    Games {
        /// Season start year (e.g. 2023 for 2023-24).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Only games involving this team.
        #[clap(long, short)]
        team_id: Option<TeamId>,

        /// Pagination cursor from a previous page's `next_cursor`.
        #[clap(long)]
        cursor: Option<u64>,

        /// Results per page.
        #[clap(long, default_value_t = 25)]
        per_page: u32,

        /// Only postseason games.
        #[clap(long)]
        postseason: bool,

        /// Case-insensitive status filter, e.g. `final`.
        #[clap(long)]
        status: Option<String>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// One game by ID.
    Game {
        game_id: GameId,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum MockCmd {
    /// Synthetic season averages for one player.
    Player {
        #[clap(long)]
        player_id: PlayerId,

        /// Position code: G, F or C. Anything else uses the base ranges.
        #[clap(long, short)]
        position: Option<Position>,

        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Seed for a reproducible draw.
        #[clap(long)]
        seed: Option<u64>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Synthetic standing for one team.
    Standing {
        #[clap(long, short)]
        team_id: TeamId,

        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Fix the win total (0-82) instead of drawing one.
        #[clap(long, value_parser = clap::value_parser!(u32).range(0..=82))]
        wins: Option<u32>,

        /// Seed for a reproducible draw.
        #[clap(long)]
        seed: Option<u64>,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-dash", version, about = "NBA stats dashboard backend")]
pub struct NbaDash {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve {
        /// Listen address (or set `NBA_DASH_BIND`).
        #[clap(long)]
        bind: Option<SocketAddr>,
    },

    /// Fetch data from the stats API, with synthetic fallbacks.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Print synthetic records straight from the generator.
    Mock {
        #[clap(subcommand)]
        cmd: MockCmd,
    },
}
