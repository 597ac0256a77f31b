use crate::config::Config;
use crate::repositories::{
    note::NoteRepository,
    session::SessionRepository,
    user::UserRepository,
};

/// The application's state.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Config,
    /// The credential table.
    pub users: UserRepository,
    /// Live sessions by token.
    pub sessions: SessionRepository,
    /// Notes by username.
    pub notes: NoteRepository,
}

impl AppState {
    /// Creates a new `AppState` with empty session and note maps.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    pub fn new(config: &Config) -> Self {
        let users = UserRepository::new(config.users.iter().cloned());
        tracing::info!("✅ Credential table loaded ({} users)", config.users.len());

        AppState {
            config: config.clone(),
            users,
            sessions: SessionRepository::new(),
            notes: NoteRepository::new(),
        }
    }
}
