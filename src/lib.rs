//! In-memory personal notes service.
//!
//! Users log in against a seeded credential table, receive an HTTP-only
//! `token` cookie, and manage their own notes through a small JSON API.
//! Everything lives in process memory and is lost on restart.

pub mod app;
pub mod config;
pub mod error;
pub mod state;

pub mod crypto {
    pub mod token;
}

pub mod models {
    pub mod note;
    pub mod session;
    pub mod user;
}

pub mod repositories {
    pub mod note;
    pub mod session;
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod notes;
}

pub mod handlers {
    pub mod auth;
    pub mod notes;
}

pub mod middleware_layer {
    pub mod auth;
}

pub mod validation {
    pub mod notes;
    pub mod payload;
}

pub use app::router;
pub use config::Config;
pub use state::AppState;
