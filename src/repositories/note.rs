use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::note::Note;

#[derive(Default)]
struct NoteBook {
    by_user: HashMap<String, Vec<Note>>,
    last_id: i64,
}

impl NoteBook {
    /// Issues `max(now_ms, last + 1)` so ids stay timestamps yet never repeat.
    fn next_id(&mut self) -> String {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }
}

/// The username → notes map.
#[derive(Clone, Default)]
pub struct NoteRepository {
    book: Arc<RwLock<NoteBook>>,
}

impl NoteRepository {
    /// Creates a new, empty `NoteRepository`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list for a user if they don't have one yet.
    pub async fn ensure_user(&self, username: &str) {
        let mut book = self.book.write().await;
        if !book.by_user.contains_key(username) {
            book.by_user.insert(username.to_string(), Vec::new());
        }
    }

    /// Returns a user's notes in insertion order.
    pub async fn list(&self, username: &str) -> Vec<Note> {
        let book = self.book.read().await;
        book.by_user.get(username).cloned().unwrap_or_default()
    }

    /// Appends a note with a fresh id to a user's list.
    pub async fn create(&self, username: &str, title: String, details: String) -> Note {
        let mut book = self.book.write().await;
        let note = Note {
            id: book.next_id(),
            title,
            details,
        };

        book.by_user
            .entry(username.to_string())
            .or_default()
            .push(note.clone());

        note
    }

    /// Removes the note with the given id. Returns whether anything was removed.
    pub async fn delete(&self, username: &str, id: &str) -> bool {
        let mut book = self.book.write().await;
        let Some(notes) = book.by_user.get_mut(username) else {
            return false;
        };

        let before = notes.len();
        notes.retain(|note| note.id != id);
        notes.len() != before
    }

    /// Returns whether a user has a notes list.
    #[cfg(test)]
    pub async fn has_user(&self, username: &str) -> bool {
        self.book.read().await.by_user.contains_key(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = NoteRepository::new();
        repo.ensure_user("a").await;
        let first = repo.create("a", "one".into(), "1".into()).await;
        let second = repo.create("a", "two".into(), "2".into()).await;

        assert_eq!(repo.list("a").await, vec![first, second]);
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing_under_rapid_creation() {
        let repo = NoteRepository::new();
        let mut ids = Vec::new();
        for i in 0..200 {
            let note = repo.create("a", format!("t{}", i), "d".into()).await;
            ids.push(note.id.parse::<i64>().unwrap());
        }

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn users_do_not_share_notes() {
        let repo = NoteRepository::new();
        repo.ensure_user("a").await;
        repo.ensure_user("b").await;
        repo.create("a", "secret".into(), "mine".into()).await;

        assert_eq!(repo.list("a").await.len(), 1);
        assert!(repo.list("b").await.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_match() {
        let repo = NoteRepository::new();
        let keep = repo.create("a", "keep".into(), "x".into()).await;
        let gone = repo.create("a", "drop".into(), "y".into()).await;

        assert!(repo.delete("a", &gone.id).await);
        assert!(!repo.delete("a", &gone.id).await);
        assert!(!repo.delete("a", "nope").await);
        assert!(!repo.delete("b", &keep.id).await);
        assert_eq!(repo.list("a").await, vec![keep]);
    }

    #[tokio::test]
    async fn ensure_user_does_not_clear_existing_notes() {
        let repo = NoteRepository::new();
        repo.ensure_user("a").await;
        repo.create("a", "t".into(), "d".into()).await;
        repo.ensure_user("a").await;

        assert!(repo.has_user("a").await);
        assert_eq!(repo.list("a").await.len(), 1);
        assert!(!repo.has_user("b").await);
        assert!(repo.list("b").await.is_empty());
    }
}
