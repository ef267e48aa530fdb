// HTTP request handlers
use crate::domain::home_state::THERMOSTAT_RANGE;
use crate::domain::lights::Room;
use crate::domain::session::SessionId;
use crate::infrastructure::html_renderer::dashboard_to_html;
use crate::infrastructure::http_response::{
    html_response, see_other, session_cookie, session_from_headers,
};
use crate::presentation::app_state::AppState;
use axum::{
    body::Body,
    extract::{Form, Path, State},
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ThermostatForm {
    pub value: i32,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page: one update step, then render
pub async fn show_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, StatusCode> {
    let (id, cookie) = resolve_session(&headers, &state)?;
    let dashboard = state.dashboard_service.render(id).await;
    html_response(dashboard_to_html(&dashboard), cookie)
}

/// Same cycle as the page, serialized as JSON
pub async fn dashboard_json(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    let (id, cookie) = resolve_session(&headers, &state)?;
    let dashboard = state.dashboard_service.render(id).await;
    Ok((
        AppendHeaders(cookie.map(|c| (header::SET_COOKIE, c))),
        Json(dashboard),
    ))
}

/// Thermostat slider submission
pub async fn set_thermostat(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ThermostatForm>,
) -> Result<Response<Body>, StatusCode> {
    let (id, cookie) = resolve_session(&headers, &state)?;

    // The slider cannot leave its range; anything else is a hand-made request
    let value = form
        .value
        .clamp(*THERMOSTAT_RANGE.start(), *THERMOSTAT_RANGE.end());
    if value != form.value {
        tracing::warn!(
            session = %id,
            requested = form.value,
            applied = value,
            "Thermostat value outside slider range"
        );
    }

    state.dashboard_service.set_thermostat(id, value).await;
    see_other("/", cookie)
}

/// Light toggle button
pub async fn toggle_light(
    Path(room): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, StatusCode> {
    let room: Room = room.parse().map_err(|e| {
        tracing::warn!("Rejected toggle: {}", e);
        StatusCode::NOT_FOUND
    })?;

    let (id, cookie) = resolve_session(&headers, &state)?;
    state.dashboard_service.toggle_light(id, room).await;
    see_other("/", cookie)
}

/// Reuse the browser's session or issue a new one along with its cookie
fn resolve_session(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<(SessionId, Option<HeaderValue>), StatusCode> {
    match session_from_headers(headers, &state.cookie_name) {
        Some(id) => Ok((id, None)),
        None => {
            let id = SessionId::new();
            Ok((id, Some(session_cookie(&state.cookie_name, id)?)))
        }
    }
}
