//! HTTP transport for the roll operations (feature `server`).
//!
//! - `POST /roll-dice` commits to a roll for the posted `publicSeed`.
//! - `POST /verify-roll` recomputes the hash for `publicSeed` and `secretSeed`.
//!
//! Invalid input maps to `400` with an `{"error": ...}` body. The server keeps
//! no record of past rolls.

pub mod config;
pub mod logger;
pub mod routes;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{post, MethodRouter};
use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::error::ServerError;
use crate::seed::SeedSource;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use logger::setup_logger;
pub use routes::AppState;

/// Build the application router.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let with_preflight = |route: MethodRouter<AppState>| {
        if config.cors {
            route.options(routes::preflight)
        } else {
            route
        }
    };

    let app = Router::new()
        .route("/roll-dice", with_preflight(post(routes::roll_dice)))
        .route("/verify-roll", with_preflight(post(routes::verify_roll)))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state);

    if config.cors {
        app.layer(middleware::map_response(routes::allow_any_origin))
    } else {
        app
    }
}

/// Bind and serve until ctrl-c.
pub async fn serve(config: ServerConfig, seeds: Arc<dyn SeedSource>) -> Result<(), ServerError> {
    config.validate()?;
    let app = router(AppState::new(seeds), &config);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, cors = config.cors, "fairroll server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("fairroll server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
