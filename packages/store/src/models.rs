//! # Domain models for notes and profiles
//!
//! Defines the data structures exchanged with the notes API and held by
//! [`crate::NotesState`]. These types are `Serialize + Deserialize` so they can
//! cross the server/client boundary via Dioxus server functions.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`NoteId`] | A server-assigned note identifier. Never empty: both [`NoteId::new`] and deserialization reject `""`. |
//! | [`Note`] | A persisted note (`{ id, title, content }` on the wire). |
//! | [`NoteDraft`] | The `{ title, content }` payload sent on create and update. |
//! | [`EditTarget`] | What the editor is working on: a [`EditTarget::Draft`] not yet known to the server, or a [`EditTarget::Persisted`] note. |
//! | [`Profile`] | The signed-in user (`{ id, email }`). |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NotesError;

/// Server-assigned identifier of a persisted note.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(pub(crate) String);

impl NoteId {
    /// Wrap a server id. Fails on the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, NotesError> {
        let id = id.into();
        if id.is_empty() {
            return Err(NotesError::EmptyNoteId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NoteId {
    type Error = NotesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NoteId> for String {
    fn from(id: NoteId) -> Self {
        id.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A note persisted on the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Title shown in lists; empty titles read as "Untitled".
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// Title and content sent to the server on create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The note the editor is bound to.
#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    /// Created locally, not yet assigned a server id.
    Draft,
    Persisted(Note),
}

impl EditTarget {
    pub fn id(&self) -> Option<&NoteId> {
        match self {
            EditTarget::Draft => None,
            EditTarget::Persisted(note) => Some(&note.id),
        }
    }

    pub fn note(&self) -> Option<&Note> {
        match self {
            EditTarget::Draft => None,
            EditTarget::Persisted(note) => Some(note),
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, EditTarget::Draft)
    }
}

impl From<Note> for EditTarget {
    fn from(note: Note) -> Self {
        EditTarget::Persisted(note)
    }
}

/// Minimal identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_rejects_empty() {
        assert_eq!(NoteId::new(""), Err(NotesError::EmptyNoteId));
        assert_eq!(NoteId::new("42").unwrap().as_str(), "42");
    }

    #[test]
    fn note_wire_shape() {
        let note: Note =
            serde_json::from_str(r#"{"id":"n1","title":"A","content":"x"}"#).unwrap();
        assert_eq!(note, Note::new(NoteId::new("n1").unwrap(), "A", "x"));

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "n1");

        // An empty id is a draft, never a persisted note.
        let empty = serde_json::from_str::<Note>(r#"{"id":"","title":"","content":""}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn untitled_display() {
        let note = Note::new(NoteId::new("1").unwrap(), "", "body");
        assert_eq!(note.display_title(), "Untitled");
    }

    #[test]
    fn edit_target_accessors() {
        let note = Note::new(NoteId::new("7").unwrap(), "t", "c");
        let target = EditTarget::from(note.clone());
        assert_eq!(target.id().map(NoteId::as_str), Some("7"));
        assert_eq!(target.note(), Some(&note));
        assert!(EditTarget::Draft.is_draft());
        assert!(EditTarget::Draft.id().is_none());
    }
}
