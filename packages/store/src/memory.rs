use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::NotesApi;
use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteId, Profile};
use crate::search::matches_query;

/// In-memory [`NotesApi`] for tests and local development.
///
/// Behaves like the server: notes are owned by the signed-in account, the
/// newest note comes first, and mutations need a session. Every call is
/// counted so callers can assert that no request was made.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: Vec<Account>,
    session: Option<String>,
    notes: Vec<OwnedNote>,
    next_id: u64,
    calls: usize,
    fail_next: Option<ApiError>,
}

#[derive(Debug)]
struct Account {
    profile: Profile,
    password: String,
}

#[derive(Debug)]
struct OwnedNote {
    owner: String,
    note: Note,
}

impl Inner {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Count the call and consume an injected failure, if any.
    fn begin_call(&mut self) -> Result<(), ApiError> {
        self.calls += 1;
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn session_user(&self) -> Result<String, ApiError> {
        self.session
            .clone()
            .ok_or_else(|| ApiError::new("Not authenticated"))
    }

    fn add_account(&mut self, email: &str, password: &str) -> Profile {
        let profile = Profile {
            id: self.next_id("user"),
            email: email.to_string(),
        };
        self.accounts.push(Account {
            profile: profile.clone(),
            password: password.to_string(),
        });
        profile
    }

    fn insert_note(&mut self, owner: String, draft: &NoteDraft) -> Note {
        let id = self.next_id("note");
        let note = Note {
            id: NoteId(id),
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        self.notes.insert(
            0,
            OwnedNote {
                owner,
                note: note.clone(),
            },
        );
        note
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an account and open a session for it, without counting a call.
    pub fn sign_in_as(&self, email: &str) -> Profile {
        let mut inner = self.lock();
        let profile = inner.add_account(email, "password");
        inner.session = Some(profile.id.clone());
        profile
    }

    /// Store a note for `owner`, without counting a call.
    pub fn seed_note(&self, owner: &Profile, title: &str, content: &str) -> Note {
        self.lock()
            .insert_note(owner.id.clone(), &NoteDraft::new(title, content))
    }

    /// Number of API calls served so far.
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: ApiError) {
        self.lock().fail_next = Some(err);
    }
}

impl NotesApi for MemoryApi {
    async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let Some(user_id) = inner.session.clone() else {
            return Ok(None);
        };
        Ok(inner
            .accounts
            .iter()
            .find(|a| a.profile.id == user_id)
            .map(|a| a.profile.clone()))
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let email = email.trim().to_lowercase();
        let user_id = inner
            .accounts
            .iter()
            .find(|a| a.profile.email == email && a.password == password)
            .map(|a| a.profile.id.clone())
            .ok_or_else(|| ApiError::new("Invalid email or password"))?;
        inner.session = Some(user_id);
        Ok(())
    }

    async fn signup(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let email = email.trim().to_lowercase();
        if inner.accounts.iter().any(|a| a.profile.email == email) {
            return Err(ApiError::new("An account with this email already exists"));
        }
        let profile = inner.add_account(&email, password);
        inner.session = Some(profile.id);
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        inner.session = None;
        Ok(())
    }

    async fn fetch_notes(&self, query: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let Some(user_id) = inner.session.clone() else {
            return Ok(Vec::new());
        };
        let query = query.unwrap_or_default();
        Ok(inner
            .notes
            .iter()
            .filter(|n| n.owner == user_id && matches_query(&n.note, query))
            .map(|n| n.note.clone())
            .collect())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let user_id = inner.session_user()?;
        Ok(inner.insert_note(user_id, draft))
    }

    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note, ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let user_id = inner.session_user()?;
        let stored = inner
            .notes
            .iter_mut()
            .find(|n| n.owner == user_id && &n.note.id == id)
            .ok_or_else(|| ApiError::new("Note not found"))?;
        stored.note.title = draft.title.clone();
        stored.note.content = draft.content.clone();
        Ok(stored.note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), ApiError> {
        let mut inner = self.lock();
        inner.begin_call()?;
        let user_id = inner.session_user()?;
        let before = inner.notes.len();
        inner
            .notes
            .retain(|n| !(n.owner == user_id && &n.note.id == id));
        if inner.notes.len() == before {
            return Err(ApiError::new("Note not found"));
        }
        Ok(())
    }
}
