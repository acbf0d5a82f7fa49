//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use spacebot_core::config::GatewayConfig;
use spacebot_knowledge::SpaceBot;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub gateway_config: GatewayConfig,
    pub start_time: std::time::Instant,
    /// The knowledge bot. Read-only after construction, so no locking.
    pub bot: Arc<SpaceBot>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            gateway_config: config,
            start_time: std::time::Instant::now(),
            bot: Arc::new(SpaceBot::new()),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let shared = Arc::new(state);

    Router::new()
        .route("/", get(super::routes::index))
        .route("/health", get(super::routes::health_check))
        // AI chat service
        .route("/api/ai/chat", post(super::routes::chat))
        .route("/api/ai/suggestions", get(super::routes::chat_suggestions))
        .route("/api/ai/topics", get(super::routes::chat_topics))
        .route("/api/ai/health", get(super::routes::chat_health))
        // Tracking feeds
        .route("/api/nasa/iss", get(super::routes::iss_tracking))
        .route("/api/nasa/satellites", get(super::routes::satellite_tracking))
        .route("/api/space/debris", get(super::routes::debris_tracking))
        .route("/api/astronauts/current", get(super::routes::current_astronauts))
        // Simulations
        .route(
            "/api/simulation/rocket-trajectory",
            get(super::routes::rocket_trajectory),
        )
        .route(
            "/api/simulation/orbital-mechanics",
            get(super::routes::orbital_mechanics),
        )
        .route(
            "/api/simulation/space-weather",
            get(super::routes::space_weather),
        )
        .route("/api/simulation/health", get(super::routes::simulation_health))
        .layer({
            let cors = CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(3600));

            // Restrict CORS origins in production via env var
            // Example: SPACEBOT_CORS_ORIGINS=https://app.example.com
            if let Ok(origins_str) = std::env::var("SPACEBOT_CORS_ORIGINS") {
                let origins: Vec<_> = origins_str
                    .split(',')
                    .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
                    .collect();
                cors.allow_origin(origins)
            } else {
                cors.allow_origin(Any)
            }
        })
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server.
pub async fn start(config: &GatewayConfig) -> anyhow::Result<()> {
    let state = AppState::new(config.clone());
    let topic_count = state.bot.knowledge_base().len();
    tracing::info!("🤖 Knowledge bot loaded ({} topics)", topic_count);

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
