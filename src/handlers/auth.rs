use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;

use crate::{
    config::Config,
    error::Result,
    middleware_layer::auth::{SESSION_COOKIE, extract_session_token},
    models::session::Session,
    services::auth as auth_service,
    state::AppState,
    validation::payload::lenient_string,
};

/// The request payload for user login.
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: String,
}

/// The response payload for a successful login.
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

/// The response payload for the session probe.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A response carrying only a message.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Creates the HTTP-only session cookie.
fn create_session_cookie(config: &Config, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);

    cookie.set_http_only(true);
    if config.secure_cookies {
        cookie.set_secure(true);
    }
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");

    cookie
}

/// Reports whether the caller's cookie names a live session.
#[axum::debug_handler]
pub async fn me(State(state): State<AppState>, cookies: Cookies) -> Response {
    let session = match extract_session_token(&cookies) {
        Some(token) => auth_service::resolve_session(&state, &token).await.ok(),
        None => None,
    };

    match session {
        Some(session) => Json(MeResponse {
            logged_in: true,
            username: Some(session.username),
        })
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(MeResponse {
                logged_in: false,
                username: None,
            }),
        )
            .into_response(),
    }
}

/// Handles user login.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(payload) = payload?;
    tracing::info!("🔐 Login attempt for: {}", payload.username);

    let username = auth_service::authenticate_user(&state, &payload.username, &payload.password)?;
    let session = auth_service::start_session(&state, username).await?;

    cookies.add(create_session_cookie(&state.config, session.token));
    tracing::info!("✅ User logged in: {}", session.username);

    let response = LoginResponse {
        message: "Login successful".to_string(),
        username: session.username,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Handles user logout.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    cookies: Cookies,
) -> Result<Response> {
    auth_service::end_session(&state, &session.token).await;

    let mut session_cookie = Cookie::new(SESSION_COOKIE, "");
    session_cookie.set_path("/");
    cookies.remove(session_cookie);

    tracing::info!("✅ User logged out: {}", session.username);

    Ok((StatusCode::OK, Json(MessageResponse::new("Logged out"))).into_response())
}
