use zeroize::Zeroizing;

/// Represents an entry in the credential table.
#[derive(Clone)]
pub struct User {
    /// The user's username.
    pub username: String,
    /// The user's password, compared verbatim.
    pub password: Zeroizing<String>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
