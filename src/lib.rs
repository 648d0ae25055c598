//! Fuel Tracker
//!
//! Registro de vehículos y repostajes en memoria, con estadísticas de
//! consumo expuestas como JSON sobre HTTP.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/servlet", routes::servlet_routes::create_servlet_router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fuel-tracker",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
