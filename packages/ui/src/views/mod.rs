mod auth;
pub use auth::AuthView;

mod notes;
pub use notes::{delete_note, load_notes, save_note, NotesView};
