use chrono::Utc;

use crate::crypto::token::generate_session_token;
use crate::error::{AppError, Result};
use crate::models::session::Session;
use crate::state::AppState;

/// Authenticates a user against the credential table.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `username` - The submitted username.
/// * `password` - The submitted password.
///
/// # Returns
///
/// A `Result` containing the canonical username.
pub fn authenticate_user(state: &AppState, username: &str, password: &str) -> Result<String> {
    tracing::debug!("🔐 Authenticating user: {}", username);

    let user = state
        .users
        .find_by_credentials(username, password)
        .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

    Ok(user.username.clone())
}

/// Opens a session for an authenticated user and makes sure the user has a
/// notes list.
///
/// # Returns
///
/// The new `Session`.
pub async fn start_session(state: &AppState, username: String) -> Result<Session> {
    if !state.users.contains(&username) {
        return Err(AppError::Internal(format!(
            "session requested for unknown user {}",
            username
        )));
    }

    let session = Session {
        token: generate_session_token(),
        username,
        created_at: Utc::now(),
    };

    state.sessions.insert(session.clone()).await;
    state.notes.ensure_user(&session.username).await;

    tracing::info!(
        "✅ Session opened for {} ({} active)",
        session.username,
        state.sessions.len().await
    );

    Ok(session)
}

/// Resolves a session token.
///
/// # Returns
///
/// The `Session`, or `AppError::Unauthenticated` when the token is unknown.
pub async fn resolve_session(state: &AppState, token: &str) -> Result<Session> {
    state
        .sessions
        .get(token)
        .await
        .ok_or(AppError::Unauthenticated)
}

/// Ends a session. Ending a session that is already gone does nothing.
pub async fn end_session(state: &AppState, token: &str) {
    match state.sessions.remove(token).await {
        Some(session) => tracing::info!("👋 Session closed for {}", session.username),
        None => tracing::debug!("Session already closed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn login_flow_opens_and_closes_sessions() {
        let state = AppState::new(&Config::default());

        let username = authenticate_user(&state, "shubh", "1234").unwrap();
        let session = start_session(&state, username).await.unwrap();

        assert!(state.notes.has_user("shubh").await);
        assert_eq!(resolve_session(&state, &session.token).await.unwrap().username, "shubh");

        end_session(&state, &session.token).await;
        end_session(&state, &session.token).await;
        assert!(matches!(
            resolve_session(&state, &session.token).await,
            Err(AppError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn bad_credentials_do_not_touch_state() {
        let state = AppState::new(&Config::default());

        assert!(matches!(
            authenticate_user(&state, "shubh", "wrong"),
            Err(AppError::Authentication(_))
        ));
        assert_eq!(state.sessions.len().await, 0);
        assert!(!state.notes.has_user("shubh").await);
    }

    #[tokio::test]
    async fn sessions_only_for_known_users() {
        let state = AppState::new(&Config::default());
        assert!(start_session(&state, "ghost".to_string()).await.is_err());
    }
}
