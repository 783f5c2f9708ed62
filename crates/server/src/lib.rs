//! Tierbank Server - HTTP surface over the rate resolver
//!
//! Routes:
//! - `GET /health` - static liveness check
//! - `GET /api/rate?balance=<decimal>` - rate for a balance
//! - `GET /api/tiers` - the active tier schedule
//! - `POST /admin/reload` - re-read the config file (SIGHUP does the same)

pub mod error;
pub mod handler;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tierbank_config::ServerConfig;

pub use error::ApiError;
pub use state::AppState;

/// Build the router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/api/rate", get(handler::rate))
        .route("/api/tiers", get(handler::tiers))
        .route("/admin/reload", post(handler::reload))
        .with_state(state)
}

/// Bind `config.listen` and serve until the process is stopped
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    #[cfg(unix)]
    reload_on_hangup(state.clone());
    tracing::info!("🏦 Tierbank server running on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await
}

/// Reload the config on every SIGHUP for the life of the process
#[cfg(unix)]
fn reload_on_hangup(state: AppState) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(hangup) => hangup,
            Err(e) => {
                tracing::warn!(error = %e, "SIGHUP reload disabled");
                return;
            }
        };
        while hangup.recv().await.is_some() {
            if let Err(e) = state.reload() {
                tracing::warn!(error = %e, "reload on SIGHUP failed, keeping current schedule");
            }
        }
    });
}
