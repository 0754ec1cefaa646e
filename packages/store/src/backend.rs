//! # The notes API boundary
//!
//! [`NotesApi`] is the async interface the view state talks to: profile and
//! session calls plus note CRUD. Implementations live elsewhere:
//! [`crate::MemoryApi`] keeps everything in memory, and the `api` crate's
//! `ServerApi` forwards each call to a Dioxus server function.
//!
//! Every call may fail with an [`ApiError`]; the caller decides which
//! fallback message to show.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteId, Profile};

/// Async client for the notes backend.
pub trait NotesApi {
    /// The signed-in user, or `None` for an anonymous session.
    fn get_profile(&self) -> impl Future<Output = Result<Option<Profile>, ApiError>>;

    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<(), ApiError>>;

    fn signup(&self, email: &str, password: &str) -> impl Future<Output = Result<(), ApiError>>;

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// List notes, optionally filtered server-side by a case-insensitive query.
    fn fetch_notes(
        &self,
        query: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Note>, ApiError>>;

    fn create_note(&self, draft: &NoteDraft) -> impl Future<Output = Result<Note, ApiError>>;

    fn update_note(
        &self,
        id: &NoteId,
        draft: &NoteDraft,
    ) -> impl Future<Output = Result<Note, ApiError>>;

    fn delete_note(&self, id: &NoteId) -> impl Future<Output = Result<(), ApiError>>;
}
