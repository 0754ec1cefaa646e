//! Error types shared by the view state and the API boundary.

use thiserror::Error;

/// Validation errors raised before any request is sent.
///
/// The `Display` text is the message shown inline to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotesError {
    #[error("Please sign in to save notes.")]
    SaveRequiresSignIn,
    #[error("Please sign in to delete notes.")]
    DeleteRequiresSignIn,
    #[error("This note has not been saved yet.")]
    DraftNotDeletable,
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Note id must not be empty")]
    EmptyNoteId,
}

/// A failed API call.
///
/// `message` is whatever the server or transport reported; `None` when the
/// failure carried no usable text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or("request failed"))]
pub struct ApiError {
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// An error without a message.
    pub fn silent() -> Self {
        Self { message: None }
    }

    /// The server's message, or the operation's generic fallback.
    pub fn user_message(&self, operation: Operation) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| operation.fallback_message().to_string())
    }
}

/// The user-facing operation an API call belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
    Delete,
    Authenticate,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to load notes",
            Operation::Save => "Failed to save note",
            Operation::Delete => "Failed to delete note",
            Operation::Authenticate => "Authentication failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_messages_fall_back() {
        assert_eq!(ApiError::new("  ").message, None);
        assert_eq!(
            ApiError::silent().user_message(Operation::Delete),
            "Failed to delete note"
        );
        assert_eq!(
            ApiError::new("Note not found").user_message(Operation::Save),
            "Note not found"
        );
    }
}
