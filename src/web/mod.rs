//! HTTP API over the stats service.

pub mod error;
pub mod routes;


use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::bdl::http::StatsProvider;
use crate::service::StatsService;
use crate::Result;

pub use error::ApiError;

pub struct AppState<P> {
    pub service: Arc<StatsService<P>>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

pub fn build_router<P>(service: Arc<StatsService<P>>) -> Router
where
    P: StatsProvider + 'static,
{
    Router::new()
        .route("/health", get(routes::health))
        .route("/api/teams", get(routes::teams::<P>))
        .route("/api/team/stats", get(routes::team_stats::<P>))
        .route("/api/team/charts", get(routes::team_charts::<P>))
        .route("/api/hornets/stats", get(routes::hornets_stats::<P>))
        .route("/api/player/:id", get(routes::player::<P>))
        .route("/api/games", get(routes::games::<P>))
        .route("/api/games/:id", get(routes::game::<P>))
        .with_state(AppState { service })
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve<P>(service: Arc<StatsService<P>>, addr: SocketAddr) -> Result<()>
where
    P: StatsProvider + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, build_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}
