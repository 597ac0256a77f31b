use chrono::{DateTime, Utc};

/// Represents a logged-in session.
///
/// Sessions carry no expiry: they live until logout or process exit.
#[derive(Debug, Clone)]
pub struct Session {
    /// The opaque token carried in the `token` cookie.
    pub token: String,
    /// The username this session authenticates.
    pub username: String,
    /// The timestamp when the session was created.
    pub created_at: DateTime<Utc>,
}
