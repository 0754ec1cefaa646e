//! Database models for the application.

mod note;
mod user;

pub use note::like_pattern;
#[cfg(feature = "server")]
pub use note::NoteRow;
#[cfg(feature = "server")]
pub use user::User;
