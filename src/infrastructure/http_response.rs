// HTTP helpers for HTML pages and the session cookie
use crate::domain::session::SessionId;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};

/// Find the session id in the request's Cookie headers, if present and well formed
pub fn session_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| value.trim().parse().ok())
}

/// Set-Cookie value binding the browser to a session
pub fn session_cookie(cookie_name: &str, id: SessionId) -> Result<HeaderValue, StatusCode> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        cookie_name, id
    ))
    .map_err(|e| {
        tracing::error!("Invalid session cookie: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Build an HTML response, attaching a session cookie when one was issued
pub fn html_response(
    html: String,
    cookie: Option<HeaderValue>,
) -> Result<Response<Body>, StatusCode> {
    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-store");

    if let Some(cookie) = cookie {
        response_builder = response_builder.header(header::SET_COOKIE, cookie);
    }

    response_builder.body(Body::from(html)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// 303 back to the dashboard after a form post
pub fn see_other(location: &'static str, cookie: Option<HeaderValue>) -> Result<Response<Body>, StatusCode> {
    let mut response_builder = Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, location);

    if let Some(cookie) = cookie {
        response_builder = response_builder.header(header::SET_COOKIE, cookie);
    }

    response_builder.body(Body::empty()).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
