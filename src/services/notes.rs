use crate::{
    error::Result,
    models::note::{NewNote, Note},
    state::AppState,
    validation::notes::validate_new_note,
};

/// Lists a user's notes.
pub async fn list_notes(state: &AppState, username: &str) -> Vec<Note> {
    state.notes.list(username).await
}

/// Creates a note for a user.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `username` - The owner of the note.
/// * `new_note` - The submitted title and details.
///
/// # Returns
///
/// A `Result` containing the stored `Note`.
pub async fn create_note(state: &AppState, username: &str, new_note: NewNote) -> Result<Note> {
    validate_new_note(&new_note)?;

    let note = state
        .notes
        .create(username, new_note.title, new_note.details)
        .await;

    tracing::info!("📝 Note {} created for {}", note.id, username);
    Ok(note)
}

/// Deletes a note. Missing notes are not an error.
pub async fn delete_note(state: &AppState, username: &str, note_id: &str) {
    if state.notes.delete(username, note_id).await {
        tracing::info!("🗑️ Note {} deleted for {}", note_id, username);
    } else {
        tracing::debug!("Note {} not found for {}, nothing to delete", note_id, username);
    }
}
