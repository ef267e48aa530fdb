// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dashboard_json, health_check, set_thermostat, show_dashboard, toggle_light,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(show_dashboard))
        .route("/thermostat", post(set_thermostat))
        .route("/lights/:room/toggle", post(toggle_light))
        .route("/api/dashboard", get(dashboard_json))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
