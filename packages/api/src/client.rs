//! [`store::NotesApi`] over the server functions in this crate.

use dioxus::prelude::ServerFnError;
use store::{ApiError, Note, NoteDraft, NoteId, NotesApi, Profile};

/// Talks to the fullstack server. Session state lives in the browser's
/// session cookie, so the client itself holds nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServerApi;

impl ServerApi {
    pub fn new() -> Self {
        Self
    }
}

/// Keep the message a server function failed with. Transport and codec
/// failures fall back to the operation's generic text.
fn api_error(err: ServerFnError) -> ApiError {
    match err {
        ServerFnError::ServerError { message, .. } => {
            tracing::debug!(error = %message, "server function failed");
            ApiError::new(message)
        }
        other => {
            tracing::warn!(error = %other, "server function call failed");
            ApiError::silent()
        }
    }
}

impl NotesApi for ServerApi {
    async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        crate::get_profile().await.map_err(api_error)
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        crate::login(email.to_string(), password.to_string())
            .await
            .map(|_| ())
            .map_err(api_error)
    }

    async fn signup(&self, email: &str, password: &str) -> Result<(), ApiError> {
        crate::signup(email.to_string(), password.to_string())
            .await
            .map(|_| ())
            .map_err(api_error)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        crate::logout().await.map_err(api_error)
    }

    async fn fetch_notes(&self, query: Option<&str>) -> Result<Vec<Note>, ApiError> {
        crate::fetch_notes(query.map(str::to_string))
            .await
            .map_err(api_error)
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        crate::create_note(draft.title.clone(), draft.content.clone())
            .await
            .map_err(api_error)
    }

    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, ApiError> {
        crate::update_note(id.to_string(), draft.title.clone(), draft.content.clone())
            .await
            .map_err(api_error)
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError> {
        crate::delete_note(id.to_string()).await.map_err(api_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Operation;

    #[test]
    fn server_message_is_kept_verbatim() {
        let err = api_error(ServerFnError::new("Note not found"));
        assert_eq!(err.message.as_deref(), Some("Note not found"));
        assert_eq!(err.user_message(Operation::Delete), "Note not found");
    }

    #[test]
    fn empty_server_message_uses_fallback() {
        let err = api_error(ServerFnError::new(""));
        assert_eq!(err.message, None);
        assert_eq!(err.user_message(Operation::Save), "Failed to save note");
    }
}
