use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};
use http::HeaderValue;
use zeroize::Zeroizing;

use crate::models::user::User;

/// Users available when `NOTES_USERS` is not set.
const DEFAULT_USERS: &str = "shubh:1234,khandani:7891";

/// The application's configuration.
#[derive(Clone)]
pub struct Config {
    /// The address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// The single browser origin allowed to make credentialed requests.
    pub allowed_origin: HeaderValue,
    /// The directory holding the browser client.
    pub static_dir: String,
    /// Whether cookies are marked `Secure`.
    pub secure_cookies: bool,
    /// The credential table.
    pub users: Vec<User>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            allowed_origin: HeaderValue::from_static("http://localhost:5173"),
            static_dir: "public".to_string(),
            secure_cookies: false,
            users: parse_users(DEFAULT_USERS).unwrap_or_default(),
        }
    }
}

impl Config {
    /// Creates a new `Config` from environment variables, falling back to
    /// the defaults for anything unset.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(addr) => addr.parse::<SocketAddr>().context("BIND_ADDR must be a socket address like 127.0.0.1:5000")?,
            Err(_) => defaults.bind_addr,
        };

        let allowed_origin = match env::var("ALLOWED_ORIGIN") {
            Ok(origin) => origin.parse::<HeaderValue>().context("ALLOWED_ORIGIN must be a valid header value")?,
            Err(_) => defaults.allowed_origin,
        };

        let users = match env::var("NOTES_USERS") {
            Ok(spec) => parse_users(&spec)?,
            Err(_) => defaults.users,
        };

        if users.is_empty() {
            anyhow::bail!("NOTES_USERS must name at least one user");
        }

        Ok(Self {
            bind_addr,
            allowed_origin,
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            secure_cookies: env::var("APP_ENV")
                .unwrap_or_else(|_| "development".to_string()) == "production",
            users,
        })
    }
}

/// Parses a `name:password,name:password` list.
pub fn parse_users(spec: &str) -> Result<Vec<User>> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (username, password) = entry
                .split_once(':')
                .with_context(|| format!("user entry '{}' must look like name:password", entry))?;
            if username.is_empty() {
                anyhow::bail!("user entry '{}' has an empty name", entry);
            }
            Ok(User {
                username: username.to_string(),
                password: Zeroizing::new(password.to_string()),
            })
        })
        .collect()
}
