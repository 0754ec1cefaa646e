//! Platform-neutral notes domain: models, the API boundary, view state and search.

pub mod auth;
pub mod backend;
pub mod error;
pub mod models;
pub mod search;
pub mod view;

mod memory;
pub use memory::MemoryApi;

pub use auth::{authenticate, AuthMode, Credentials};
pub use backend::NotesApi;
pub use error::{ApiError, NotesError, Operation};
pub use models::{EditTarget, Note, NoteDraft, NoteId, Profile};
pub use view::{NotesState, SaveRequest};
