//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_dash::{
    bdl::http::GamesQuery,
    cli::{Commands, GetCmd, MockCmd, NbaDash},
    commands::{
        build_service, game_data::handle_game, game_data::handle_games, handle_serve,
        mock_data::{handle_mock_player, handle_mock_standing},
        player_data::handle_player,
        team_data::{handle_team_stats, handle_teams},
    },
    config::Config,
    fallback::FallbackGenerator,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaDash::parse();
    let config = Config::from_env().context("failed to read configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nba_dash=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::Serve { bind } => {
            let service = build_service(&config).context("failed to build stats client")?;
            handle_serve(service, bind.unwrap_or(config.bind))
                .await
                .context("server error")?;
        }

        Commands::Get { cmd } => {
            let service = build_service(&config).context("failed to build stats client")?;
            let output = match cmd {
                GetCmd::Teams { output } => handle_teams(&service, output.json).await?,

                GetCmd::TeamStats {
                    team_id,
                    season,
                    stat,
                    output,
                } => handle_team_stats(&service, team_id, season, stat, output.json).await?,

                GetCmd::Player {
                    player_id,
                    season,
                    output,
                } => handle_player(&service, player_id, season, output.json).await?,

                GetCmd::Games {
                    season,
                    team_id,
                    cursor,
                    per_page,
                    postseason,
                    status,
                    output,
                } => {
                    let query = GamesQuery {
                        cursor,
                        per_page: Some(per_page),
                        postseason: postseason.then_some(true),
                        ..GamesQuery::for_season(season)
                    }
                    .with_team(team_id);
                    handle_games(&service, &query, status.as_deref(), output.json).await?
                }

                GetCmd::Game { game_id, output } => {
                    handle_game(&service, game_id, output.json).await?
                }
            };
            println!("{output}");
        }

        Commands::Mock { cmd } => {
            let output = match cmd {
                MockCmd::Player {
                    player_id,
                    position,
                    season,
                    seed,
                    output,
                } => {
                    let generator = FallbackGenerator::from_seed(seed.or(config.mock_seed));
                    handle_mock_player(
                        &generator,
                        player_id,
                        position.unwrap_or_default(),
                        season,
                        output.json,
                    )?
                }

                MockCmd::Standing {
                    team_id,
                    season,
                    wins,
                    seed,
                    output,
                } => {
                    let generator = FallbackGenerator::from_seed(seed.or(config.mock_seed));
                    handle_mock_standing(&generator, team_id, season, wins, output.json)?
                }
            };
            println!("{output}");
        }
    }

    Ok(())
}
