//! # Notes view state
//!
//! [`NotesState`] is everything the notes page knows: the note list, the search
//! query, the selected note, the edit buffer and the loading/error flags. It
//! contains no I/O of its own.
//!
//! ## Request lifecycle
//!
//! Each remote operation is split in three so a UI can hold the state in a
//! reactive cell without keeping it borrowed across an `.await`:
//!
//! 1. `begin_*` validates and returns the request to send, or records an
//!    inline error and returns `Err` (no request is made).
//! 2. The caller sends the request through a [`NotesApi`].
//! 3. `finish_*` reconciles the response. Local state only changes after a
//!    successful response; failures only set `error`.
//!
//! [`NotesState::load`], [`NotesState::save`] and [`NotesState::delete`]
//! compose the three steps for callers that can hold `&mut self` throughout.
//!
//! Concurrent requests are not coordinated. When a save and a delete for the
//! same note race, whichever response is reconciled last wins.

use crate::backend::NotesApi;
use crate::error::{ApiError, NotesError, Operation};
use crate::models::{EditTarget, Note, NoteDraft, NoteId, Profile};
use crate::search::filter_notes;

/// A create or update, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest {
    Create(NoteDraft),
    Update { id: NoteId, draft: NoteDraft },
}

impl SaveRequest {
    pub async fn send<A: NotesApi>(&self, api: &A) -> Result<Note, ApiError> {
        match self {
            SaveRequest::Create(draft) => api.create_note(draft).await,
            SaveRequest::Update { id, draft } => api.update_note(id, draft).await,
        }
    }
}

/// State of the notes page.
#[derive(Clone, Debug, PartialEq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub query: String,
    pub selected: Option<EditTarget>,
    pub edit_title: String,
    pub edit_content: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            query: String::new(),
            selected: None,
            edit_title: String::new(),
            edit_content: String::new(),
            // The first load starts on mount.
            loading: true,
            error: None,
        }
    }
}

impl NotesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes matching the current query, in list order.
    pub fn filtered(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.query)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        self.edit_title = title.into();
    }

    pub fn set_edit_content(&mut self, content: impl Into<String>) {
        self.edit_content = content.into();
    }

    /// Whether the editor is bound to a draft or a note.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_selected(&self, note: &Note) -> bool {
        self.selected
            .as_ref()
            .and_then(EditTarget::id)
            .is_some_and(|id| *id == note.id)
    }

    /// Bind the editor to a new, unsaved draft.
    pub fn start_new_note(&mut self) {
        self.selected = Some(EditTarget::Draft);
        self.edit_title.clear();
        self.edit_content.clear();
    }

    /// Bind the editor to `note`, dropping any unsaved edits.
    pub fn select_note(&mut self, note: &Note) {
        self.selected = Some(EditTarget::Persisted(note.clone()));
        self.edit_title = note.title.clone();
        self.edit_content = note.content.clone();
    }

    /// Restore the edit buffer from the selection.
    pub fn reset_edits(&mut self) {
        match self.selected.as_ref().and_then(EditTarget::note) {
            Some(note) => {
                self.edit_title = note.title.clone();
                self.edit_content = note.content.clone();
            }
            None => {
                self.edit_title.clear();
                self.edit_content.clear();
            }
        }
    }

    fn edit_draft(&self) -> NoteDraft {
        NoteDraft::new(self.edit_title.clone(), self.edit_content.clone())
    }

    fn reject(&mut self, err: NotesError) -> NotesError {
        self.error = Some(err.to_string());
        err
    }

    fn fail(&mut self, operation: Operation, err: &ApiError) {
        self.error = Some(err.user_message(operation));
    }

    /// Start a list request. Returns the query to send, `None` when empty.
    pub fn begin_load(&mut self) -> Option<String> {
        self.error = None;
        self.loading = true;
        (!self.query.is_empty()).then(|| self.query.clone())
    }

    pub fn finish_load(&mut self, result: Result<Vec<Note>, ApiError>) {
        self.loading = false;
        match result {
            Ok(notes) => {
                self.notes = notes;
                if self.selected.is_none() {
                    if let Some(first) = self.notes.first().cloned() {
                        self.select_note(&first);
                    }
                }
            }
            Err(err) => self.fail(Operation::Load, &err),
        }
    }

    /// Validate a save. A draft (or no selection) becomes a create, a
    /// persisted note an update.
    pub fn begin_save(&mut self, profile: Option<&Profile>) -> Result<SaveRequest, NotesError> {
        if profile.is_none() {
            return Err(self.reject(NotesError::SaveRequiresSignIn));
        }
        self.error = None;
        let draft = self.edit_draft();
        Ok(match self.selected.as_ref().and_then(EditTarget::id) {
            Some(id) => SaveRequest::Update {
                id: id.clone(),
                draft,
            },
            None => SaveRequest::Create(draft),
        })
    }

    pub fn finish_save(&mut self, request: &SaveRequest, result: Result<Note, ApiError>) {
        let saved = match result {
            Ok(note) => note,
            Err(err) => return self.fail(Operation::Save, &err),
        };
        match request {
            SaveRequest::Create(_) => self.notes.insert(0, saved.clone()),
            SaveRequest::Update { .. } => {
                for note in self.notes.iter_mut().filter(|n| n.id == saved.id) {
                    *note = saved.clone();
                }
            }
        }
        self.selected = Some(EditTarget::Persisted(saved));
    }

    /// Validate a delete. Drafts have nothing to delete on the server.
    pub fn begin_delete(
        &mut self,
        target: &EditTarget,
        profile: Option<&Profile>,
    ) -> Result<NoteId, NotesError> {
        if profile.is_none() {
            return Err(self.reject(NotesError::DeleteRequiresSignIn));
        }
        let Some(id) = target.id() else {
            return Err(self.reject(NotesError::DraftNotDeletable));
        };
        self.error = None;
        Ok(id.clone())
    }

    pub fn finish_delete(&mut self, id: &NoteId, result: Result<(), ApiError>) {
        if let Err(err) = result {
            return self.fail(Operation::Delete, &err);
        }
        self.notes.retain(|n| n.id != *id);
        if self.selected.as_ref().and_then(EditTarget::id) == Some(id) {
            self.selected = None;
            self.edit_title.clear();
            self.edit_content.clear();
        }
    }

    /// Re-query the server with the current query.
    pub async fn load<A: NotesApi>(&mut self, api: &A) {
        let query = self.begin_load();
        let result = api.fetch_notes(query.as_deref()).await;
        self.finish_load(result);
    }

    /// Persist the edit buffer.
    pub async fn save<A: NotesApi>(
        &mut self,
        api: &A,
        profile: Option<&Profile>,
    ) -> Result<(), NotesError> {
        let request = self.begin_save(profile)?;
        let result = request.send(api).await;
        self.finish_save(&request, result);
        Ok(())
    }

    pub async fn delete<A: NotesApi>(
        &mut self,
        api: &A,
        target: &EditTarget,
        profile: Option<&Profile>,
    ) -> Result<(), NotesError> {
        let id = self.begin_delete(target, profile)?;
        let result = api.delete_note(&id).await;
        self.finish_delete(&id, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryApi;

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note::new(NoteId::new(id).unwrap(), title, content)
    }

    fn ids(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.id.to_string()).collect()
    }

    /// A signed-in account with two notes, loaded into fresh state.
    async fn loaded() -> (MemoryApi, Profile, NotesState) {
        let api = MemoryApi::new();
        let me = api.sign_in_as("me@example.com");
        api.seed_note(&me, "B", "y");
        api.seed_note(&me, "A", "x");
        let mut state = NotesState::new();
        state.load(&api).await;
        (api, me, state)
    }

    #[test]
    fn filtered_scenario() {
        let mut state = NotesState::new();
        state.notes = vec![note("1", "A", "x"), note("2", "B", "y")];
        state.set_query("a");
        assert_eq!(state.filtered(), vec![&state.notes[0]]);

        state.set_query("");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn selection_tracks_editor_binding() {
        let mut state = NotesState::new();
        assert!(!state.has_selection());
        state.start_new_note();
        assert!(state.has_selection());

        let a = note("1", "A", "x");
        state.select_note(&a);
        state.finish_delete(&a.id, Ok(()));
        assert!(!state.has_selection());
    }

    #[test]
    fn start_new_note_is_local() {
        let mut state = NotesState::new();
        state.select_note(&note("1", "A", "x"));
        state.start_new_note();
        assert_eq!(state.selected, Some(EditTarget::Draft));
        assert!(state.edit_title.is_empty());
        assert!(state.edit_content.is_empty());
    }

    #[test]
    fn select_discards_unsaved_edits() {
        let mut state = NotesState::new();
        let a = note("1", "A", "x");
        state.select_note(&a);
        state.set_edit_title("A edited");
        state.select_note(&a);
        assert_eq!(state.edit_title, "A");
        assert!(state.is_selected(&a));
    }

    #[test]
    fn reset_restores_buffer() {
        let mut state = NotesState::new();
        state.select_note(&note("1", "A", "x"));
        state.set_edit_content("changed");
        state.reset_edits();
        assert_eq!(state.edit_content, "x");

        state.start_new_note();
        state.set_edit_title("draft");
        state.reset_edits();
        assert!(state.edit_title.is_empty());
    }

    #[tokio::test]
    async fn load_selects_first_note_once() {
        let (api, me, mut state) = loaded().await;
        assert!(!state.loading);
        assert_eq!(state.notes.len(), 2);
        let first = state.notes[0].clone();
        assert!(state.is_selected(&first));
        assert_eq!(state.edit_title, first.title);

        // A reload keeps the existing selection.
        api.seed_note(&me, "C", "z");
        state.load(&api).await;
        assert_eq!(state.notes.len(), 3);
        assert!(state.is_selected(&first));
    }

    #[tokio::test]
    async fn load_sends_query_only_when_set() {
        let (api, _, mut state) = loaded().await;
        state.set_query("b");
        state.load(&api).await;
        assert_eq!(state.notes.len(), 1);
        assert_eq!(state.notes[0].title, "B");
    }

    #[tokio::test]
    async fn load_failure_keeps_list() {
        let (api, _, mut state) = loaded().await;
        api.fail_next(ApiError::silent());
        state.load(&api).await;
        assert_eq!(state.error.as_deref(), Some("Failed to load notes"));
        assert_eq!(state.notes.len(), 2);
        assert!(!state.loading);

        api.fail_next(ApiError::new("database unavailable"));
        state.load(&api).await;
        assert_eq!(state.error.as_deref(), Some("database unavailable"));

        state.load(&api).await;
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn new_note_save_prepends_server_note() {
        let (api, me, mut state) = loaded().await;
        let before = ids(&state.notes);

        state.start_new_note();
        state.set_edit_title("Fresh");
        state.set_edit_content("body");
        state.save(&api, Some(&me)).await.unwrap();

        assert_eq!(state.notes.len(), before.len() + 1);
        let created = &state.notes[0];
        assert_eq!(created.title, "Fresh");
        assert!(!before.contains(&created.id.to_string()));
        assert_eq!(ids(&state.notes[1..]), before);
        assert_eq!(state.selected, Some(EditTarget::Persisted(created.clone())));
    }

    #[tokio::test]
    async fn save_without_selection_creates() {
        let api = MemoryApi::new();
        let me = api.sign_in_as("me@example.com");
        let mut state = NotesState::new();
        state.set_edit_title("loose");
        state.save(&api, Some(&me)).await.unwrap();
        assert_eq!(state.notes.len(), 1);
    }

    #[tokio::test]
    async fn save_existing_replaces_in_place() {
        let (api, me, mut state) = loaded().await;
        let order = ids(&state.notes);
        let second = state.notes[1].clone();

        state.select_note(&second);
        state.set_edit_content("y, revised");
        state.save(&api, Some(&me)).await.unwrap();

        assert_eq!(ids(&state.notes), order);
        assert_eq!(state.notes[1].content, "y, revised");
        assert_eq!(state.notes[0].content, "x");
        assert!(state.is_selected(&state.notes[1].clone()));
    }

    #[tokio::test]
    async fn save_unauthenticated_makes_no_request() {
        let (api, _, mut state) = loaded().await;
        let calls = api.calls();
        let notes = state.notes.clone();

        state.start_new_note();
        let err = state.save(&api, None).await.unwrap_err();

        assert_eq!(err, NotesError::SaveRequiresSignIn);
        assert_eq!(state.error.as_deref(), Some("Please sign in to save notes."));
        assert_eq!(state.notes, notes);
        assert_eq!(api.calls(), calls);
    }

    #[tokio::test]
    async fn save_failure_leaves_state() {
        let (api, me, mut state) = loaded().await;
        let snapshot = state.clone();
        state.set_edit_title("edited");
        api.fail_next(ApiError::silent());
        state.save(&api, Some(&me)).await.unwrap();

        assert_eq!(state.error.as_deref(), Some("Failed to save note"));
        assert_eq!(state.notes, snapshot.notes);
        assert_eq!(state.selected, snapshot.selected);
        assert_eq!(state.edit_title, "edited");
    }

    #[tokio::test]
    async fn delete_selected_clears_selection() {
        let (api, me, mut state) = loaded().await;
        let selected = state.notes[0].clone();
        let other = state.notes[1].clone();

        state
            .delete(&api, &EditTarget::from(selected.clone()), Some(&me))
            .await
            .unwrap();

        assert_eq!(state.notes, vec![other]);
        assert_eq!(state.selected, None);
        assert!(state.edit_title.is_empty());
        assert!(state.edit_content.is_empty());
    }

    #[tokio::test]
    async fn delete_other_keeps_selection() {
        let (api, me, mut state) = loaded().await;
        let selected = state.notes[0].clone();
        let other = state.notes[1].clone();

        state
            .delete(&api, &EditTarget::from(other), Some(&me))
            .await
            .unwrap();

        assert_eq!(state.notes, vec![selected.clone()]);
        assert!(state.is_selected(&selected));
    }

    #[tokio::test]
    async fn delete_requires_sign_in_and_an_id() {
        let (api, me, mut state) = loaded().await;
        let calls = api.calls();
        let target = EditTarget::from(state.notes[0].clone());

        let err = state.delete(&api, &target, None).await.unwrap_err();
        assert_eq!(err, NotesError::DeleteRequiresSignIn);
        assert_eq!(state.error.as_deref(), Some("Please sign in to delete notes."));

        let err = state
            .delete(&api, &EditTarget::Draft, Some(&me))
            .await
            .unwrap_err();
        assert_eq!(err, NotesError::DraftNotDeletable);

        assert_eq!(state.notes.len(), 2);
        assert_eq!(api.calls(), calls);
    }

    #[tokio::test]
    async fn delete_failure_surfaces_message() {
        let (api, me, mut state) = loaded().await;
        let target = EditTarget::from(state.notes[0].clone());
        api.fail_next(ApiError::new("Note not found"));
        state.delete(&api, &target, Some(&me)).await.unwrap();
        assert_eq!(state.error.as_deref(), Some("Note not found"));
        assert_eq!(state.notes.len(), 2);
    }

    #[test]
    fn late_update_after_delete_reselects() {
        // Save and delete raced; the update resolved last.
        let mut state = NotesState::new();
        let a = note("1", "A", "x");
        state.notes = vec![a.clone()];
        state.select_note(&a);

        let request = state.begin_save(Some(&Profile {
            id: "u".into(),
            email: "u@x".into(),
        }));
        let request = request.unwrap();
        state.finish_delete(&a.id, Ok(()));
        state.finish_save(&request, Ok(a.clone()));

        assert!(state.notes.is_empty());
        assert!(state.is_selected(&a));
    }
}
