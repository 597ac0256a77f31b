use garde::Validate;

use crate::error::{AppError, Result};
use crate::models::note::NewNote;

/// Validates a note before it is stored.
///
/// Both `title` and `details` must be non-empty; nothing else is checked.
pub fn validate_new_note(note: &NewNote) -> Result<()> {
    note.validate().map_err(|report| {
        tracing::debug!("Rejected note: {}", report);
        AppError::Validation("Title and details are required".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, details: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            details: details.to_string(),
        }
    }

    #[test]
    fn requires_both_fields() {
        assert!(validate_new_note(&note("t", "d")).is_ok());
        assert!(matches!(validate_new_note(&note("", "d")), Err(AppError::Validation(_))));
        assert!(matches!(validate_new_note(&note("t", "")), Err(AppError::Validation(_))));
        assert!(validate_new_note(&NewNote::default()).is_err());
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(validate_new_note(&note(" ", " ")).is_ok());
    }
}
