//! HTTP server wiring

use crate::config::AppConfig;
use crate::core::fetcher::HttpFactSource;
use crate::core::profile::ProfileService;
use crate::routes;
use crate::utils::error::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub profile: ProfileService<HttpFactSource>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let source = HttpFactSource::from_config(config)?;

        Ok(Self {
            profile: ProfileService::new(config.user_profile(), source),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::root_routes())
        .merge(routes::health_routes())
        .merge(routes::profile_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server until shutdown
pub async fn run(state: AppState, port: u16) -> anyhow::Result<()> {
    let state = Arc::new(state);
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
