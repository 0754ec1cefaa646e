//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::make_api;

pub mod views;

pub const NOTES_CSS: Asset = asset!("/assets/notes.css");

mod auth;
pub use auth::{refresh_profile, sign_out, use_auth, AuthProvider, AuthState, SignOutButton};

mod empty_state;
pub use empty_state::EmptyState;

mod sidebar;
pub use sidebar::AppSidebar;

mod note_list;
pub use note_list::NoteList;

mod note_editor;
pub use note_editor::NoteEditor;
