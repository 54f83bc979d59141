//! Command implementations for the nba-dash CLI

pub mod game_data;
pub mod mock_data;
pub mod player_data;
pub mod team_data;


use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::bdl::http::{BdlClient, StatsProvider};
use crate::config::Config;
use crate::fallback::FallbackGenerator;
use crate::service::StatsService;
use crate::Result;

/// Production service wired from configuration.
pub fn build_service(config: &Config) -> Result<StatsService<BdlClient>> {
    if config.api_key.is_empty() {
        info!("no API key configured, requests are anonymous");
    }
    let client = BdlClient::new(&config.api_key, config.base_url.clone())?;
    Ok(StatsService::new(
        client,
        FallbackGenerator::from_seed(config.mock_seed),
        config.cache_capacity,
    ))
}

/// Render `value` as pretty JSON or through `text`.
pub fn render<T, F>(value: &T, as_json: bool, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if as_json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

/// Handle the serve command
pub async fn handle_serve<P>(service: StatsService<P>, bind: SocketAddr) -> Result<()>
where
    P: StatsProvider + 'static,
{
    crate::web::serve(Arc::new(service), bind).await
}
