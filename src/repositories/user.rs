use std::collections::HashMap;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::models::user::User;

/// The read-only credential table, keyed by username.
#[derive(Clone, Debug)]
pub struct UserRepository {
    users: Arc<HashMap<String, User>>,
}

impl UserRepository {
    /// Creates a new `UserRepository` from a seed list. Later duplicates
    /// replace earlier ones.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();

        Self {
            users: Arc::new(users),
        }
    }

    /// Finds the user whose username and password both match exactly.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<&User> {
        let user = self.users.get(username)?;
        let matches: bool = user.password.as_bytes().ct_eq(password.as_bytes()).into();
        matches.then_some(user)
    }

    /// Returns whether a username is present in the table.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    fn user(name: &str, password: &str) -> User {
        User {
            username: name.to_string(),
            password: Zeroizing::new(password.to_string()),
        }
    }

    #[test]
    fn matches_exact_credentials_only() {
        let repo = UserRepository::new([user("shubh", "1234"), user("khandani", "7891")]);

        assert_eq!(repo.find_by_credentials("shubh", "1234").map(|u| u.username.as_str()), Some("shubh"));
        assert!(repo.find_by_credentials("shubh", "7891").is_none());
        assert!(repo.find_by_credentials("shubh", "12345").is_none());
        assert!(repo.find_by_credentials("Shubh", "1234").is_none());
        assert!(repo.find_by_credentials("nobody", "1234").is_none());
        assert!(repo.find_by_credentials("", "").is_none());
    }

    #[test]
    fn contains_reports_known_users() {
        let repo = UserRepository::new([user("a", "b")]);
        assert!(repo.contains("a"));
        assert!(!repo.contains("b"));
    }
}
