use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::validation::payload::lenient_string;

/// Represents a note owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Creation time in Unix milliseconds, as a decimal string.
    pub id: String,
    /// The note's heading.
    pub title: String,
    /// The note's body.
    pub details: String,
}

/// The user-supplied fields of a note that has not been stored yet.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewNote {
    #[serde(default, deserialize_with = "lenient_string")]
    #[garde(length(min = 1))]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    #[garde(length(min = 1))]
    pub details: String,
}
