use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    services::auth as auth_service,
    state::AppState,
};

/// The name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Extracts the session token from the request cookies.
///
/// # Arguments
///
/// * `cookies` - The request cookies.
///
/// # Returns
///
/// An `Option` containing the token if a non-empty one was sent.
pub fn extract_session_token(cookies: &Cookies) -> Option<String> {
    cookies
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// A middleware that requires a valid session to be present.
///
/// On success the resolved `Session` is inserted into the request
/// extensions for the handler to pick up.
pub async fn require_auth(
    State(state): State<AppState>,
    cookies: Cookies,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    tracing::debug!("🔐 Checking authentication...");

    let token = extract_session_token(&cookies).ok_or_else(|| {
        tracing::warn!("❌ No token cookie found");
        AppError::Unauthenticated
    })?;

    let session = auth_service::resolve_session(&state, &token)
        .await
        .inspect_err(|_| tracing::warn!("❌ Unknown session token"))?;

    tracing::debug!("✅ User authenticated: {}", session.username);

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}
