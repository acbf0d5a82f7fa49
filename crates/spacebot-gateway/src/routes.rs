//! API route handlers for the gateway.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;

use super::server::AppState;

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "error": message,
            "status": "error",
        })),
    )
        .into_response()
}

/// Service index.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "SpaceBot API",
        "status": "active",
        "endpoints": {
            "/api/ai/chat": "AI chat endpoint",
            "/api/simulation/rocket-trajectory": "Rocket trajectory simulation",
            "/api/nasa/iss": "ISS tracking data",
            "/api/nasa/satellites": "Satellite tracking data",
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Gateway health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "spacebot-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Main chat endpoint for space-related queries.
///
/// Input validation lives here, not in the matcher: the bot itself is a
/// total function and never rejects input.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let Some(raw) = body.get("message").and_then(|v| v.as_str()) else {
        return bad_request("Missing message in request body");
    };
    let message = raw.trim();
    if message.is_empty() {
        return bad_request("Empty message provided");
    }
    let user_id = body
        .get("user_id")
        .and_then(|v| v.as_str())
        .unwrap_or("anonymous");

    let reply = state.bot.respond(message);
    tracing::debug!(
        user_id,
        confidence = reply.confidence,
        "chat reply ({} suggestion(s))",
        reply.suggestions.len()
    );

    Json(serde_json::json!({
        "response": reply.message,
        "confidence": reply.confidence,
        "suggestions": reply.suggestions,
        "sources": reply.sources,
        "timestamp": Utc::now().to_rfc3339(),
        "status": "success",
    }))
    .into_response()
}

/// Conversation starter suggestions.
pub async fn chat_suggestions() -> Json<serde_json::Value> {
    let sampled = spacebot_knowledge::sample_starters(&mut rand::thread_rng());
    Json(serde_json::json!({
        "suggestions": sampled,
        "total_available": spacebot_knowledge::starter_pool().len(),
        "status": "success",
    }))
}

/// Available knowledge topics.
pub async fn chat_topics() -> Json<serde_json::Value> {
    let catalog = spacebot_knowledge::topic_catalog();
    let topics: serde_json::Map<String, serde_json::Value> = catalog
        .iter()
        .map(|info| {
            (
                info.id.to_string(),
                serde_json::json!({
                    "name": info.name,
                    "description": info.description,
                    "examples": info.examples,
                }),
            )
        })
        .collect();
    Json(serde_json::json!({
        "topics": topics,
        "count": catalog.len(),
        "status": "success",
    }))
}

/// Health check for the AI chat service.
pub async fn chat_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "AI Chat Service",
        "model_status": "loaded",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Mock ISS tracking data.
pub async fn iss_tracking() -> Json<serde_json::Value> {
    let snap = spacebot_telemetry::iss_snapshot(&mut rand::thread_rng());
    Json(serde_json::json!({
        "position": snap.position,
        "velocity": snap.velocity,
        "timestamp": Utc::now().to_rfc3339(),
        "crew_count": snap.crew_count,
        "next_pass": snap.next_pass,
    }))
}

/// Mock satellite tracking data.
pub async fn satellite_tracking() -> Json<serde_json::Value> {
    let sats = spacebot_telemetry::satellites(&mut rand::thread_rng());
    let total = sats.len();
    Json(serde_json::json!({
        "satellites": sats,
        "total_count": total,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Mock space debris tracking data.
pub async fn debris_tracking() -> Json<serde_json::Value> {
    let debris = spacebot_telemetry::debris_field(&mut rand::thread_rng());
    let high_risk = spacebot_telemetry::high_risk_count(&debris);
    let total = debris.len();
    Json(serde_json::json!({
        "debris": debris,
        "total_tracked": total,
        "high_risk_count": high_risk,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Current astronauts in space.
pub async fn current_astronauts() -> Json<serde_json::Value> {
    let crew = spacebot_telemetry::current_astronauts(Utc::now());
    let average = spacebot_telemetry::average_days_in_space(&crew);
    let total = crew.len();
    Json(serde_json::json!({
        "astronauts": crew,
        "total_count": total,
        "average_days_in_space": average,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Simulated rocket trajectory.
pub async fn rocket_trajectory() -> Json<serde_json::Value> {
    let trajectory = spacebot_telemetry::rocket_trajectory(&mut rand::thread_rng());
    let max_altitude = spacebot_telemetry::simulation::max_altitude(&trajectory);
    Json(serde_json::json!({
        "status": "success",
        "trajectory": trajectory,
        "metadata": {
            "duration_seconds": 300,
            "max_altitude": max_altitude,
            "simulation_type": "basic_rocket_trajectory",
        },
    }))
}

/// Simulated orbital mechanics data.
pub async fn orbital_mechanics() -> Json<serde_json::Value> {
    let orbital_data = spacebot_telemetry::orbital_mechanics(&mut rand::thread_rng());
    Json(serde_json::json!({
        "status": "success",
        "orbital_data": orbital_data,
        "metadata": {
            "orbital_period_minutes": 93,
            "simulation_type": "circular_orbit",
            "reference_body": "Earth",
        },
    }))
}

/// Simulated space weather conditions.
pub async fn space_weather() -> Json<serde_json::Value> {
    let weather = spacebot_telemetry::space_weather(&mut rand::thread_rng());
    let alerts = spacebot_telemetry::weather_alerts(&weather);
    Json(serde_json::json!({
        "status": "success",
        "space_weather": weather,
        "timestamp": Utc::now().to_rfc3339(),
        "alerts": alerts,
    }))
}

/// Health check for the simulation service.
pub async fn simulation_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "Space Simulation Service",
        "available_simulations": [
            "rocket-trajectory",
            "orbital-mechanics",
            "space-weather",
        ],
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
