//! # API crate: shared fullstack server functions for the notes app
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the supporting modules they depend on, and [`ServerApi`], the
//! client-side [`store::NotesApi`] implementation that forwards to them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Signup policy, Argon2 password hashing, session helpers |
//! | [`config`] | `server` | [`config::ServerConfig`] read from the environment |
//! | [`db`] | none | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | partly `server` | `users` / `notes` rows and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server
//! logic (behind `#[cfg(feature = "server")]`) and once as a thin client stub
//! that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_profile`, `login`, `signup`, `logout`
//! - **Notes**: `fetch_notes`, `create_note`, `update_note`, `delete_note`
//!
//! Notes belong to the account in the session. Anonymous sessions list no
//! notes and cannot mutate any.

use dioxus::prelude::*;

pub mod auth;
mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod db;
pub mod models;

pub use client::ServerApi;
pub use store::{Note, Profile};

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

#[cfg(feature = "server")]
async fn pool() -> Result<&'static sqlx::PgPool, ServerFnError> {
    db::get_pool().await.map_err(server_error)
}

/// Get the signed-in user's profile from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    use crate::models::User;

    let Some(user_id) = auth::session_user_id(&session).await? else {
        return Ok(None);
    };

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool().await?)
        .await
        .map_err(server_error)?;

    Ok(user.map(|u| u.to_profile()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<Profile, ServerFnError> {
    use crate::models::User;

    let email = auth::normalize_email(&email);

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool().await?)
        .await
        .map_err(server_error)?;

    let Some(user) = user else {
        tracing::warn!("login rejected: unknown account");
        return Err(ServerFnError::new("Invalid email or password"));
    };

    if !auth::verify_password(&password, &user.password_hash).map_err(server_error)? {
        tracing::warn!(user_id = %user.id, "login rejected: wrong password");
        return Err(ServerFnError::new("Invalid email or password"));
    }

    auth::start_session(&session, user.id).await?;
    tracing::info!(user_id = %user.id, "logged in");

    Ok(user.to_profile())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an account with email and password and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/signup", session: tower_sessions::Session)]
pub async fn signup(email: String, password: String) -> Result<Profile, ServerFnError> {
    use crate::models::User;

    let min_len = config::server_config()
        .map_err(server_error)?
        .password_min_length;
    let email = auth::validate_signup(&email, &password, min_len).map_err(ServerFnError::new)?;

    let pool = pool().await?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(server_error)?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(server_error)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(server_error)?;

    auth::start_session(&session, user.id).await?;
    tracing::info!(user_id = %user.id, "account created");

    Ok(user.to_profile())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/signup")]
pub async fn signup(email: String, password: String) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some(user_id) = auth::session_user_id(&session).await? {
        tracing::info!(user_id = %user_id, "logged out");
    }
    session.flush().await.map_err(server_error)?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List the signed-in user's notes, newest first.
///
/// A non-empty `query` keeps notes whose title or content contains it,
/// ignoring case.
#[cfg(feature = "server")]
#[post("/api/notes/search", session: tower_sessions::Session)]
pub async fn fetch_notes(query: Option<String>) -> Result<Vec<Note>, ServerFnError> {
    use crate::models::NoteRow;

    let Some(user_id) = auth::session_user_id(&session).await? else {
        return Ok(Vec::new());
    };

    let pattern = query
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(models::like_pattern);

    let rows: Vec<NoteRow> = sqlx::query_as(
        "SELECT * FROM notes
         WHERE user_id = $1
           AND ($2::text IS NULL OR title ILIKE $2 OR content ILIKE $2)
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .bind(pattern)
    .fetch_all(pool().await?)
    .await
    .map_err(server_error)?;

    rows.into_iter()
        .map(|row| row.into_note().map_err(server_error))
        .collect()
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/search")]
pub async fn fetch_notes(query: Option<String>) -> Result<Vec<Note>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a note owned by the signed-in user.
#[cfg(feature = "server")]
#[post("/api/notes/create", session: tower_sessions::Session)]
pub async fn create_note(title: String, content: String) -> Result<Note, ServerFnError> {
    use crate::models::NoteRow;

    let user_id = auth::require_user_id(&session).await?;

    let row: NoteRow = sqlx::query_as(
        "INSERT INTO notes (user_id, title, content) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user_id)
    .bind(&title)
    .bind(&content)
    .fetch_one(pool().await?)
    .await
    .map_err(server_error)?;

    tracing::info!(user_id = %user_id, note_id = %row.id, "note created");
    row.into_note().map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/create")]
pub async fn create_note(title: String, content: String) -> Result<Note, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Replace the title and content of one of the signed-in user's notes.
#[cfg(feature = "server")]
#[post("/api/notes/update", session: tower_sessions::Session)]
pub async fn update_note(
    id: String,
    title: String,
    content: String,
) -> Result<Note, ServerFnError> {
    use crate::models::NoteRow;

    let user_id = auth::require_user_id(&session).await?;
    let note_id =
        uuid::Uuid::parse_str(&id).map_err(|_| ServerFnError::new("Note not found"))?;

    let row: Option<NoteRow> = sqlx::query_as(
        "UPDATE notes SET title = $3, content = $4, updated_at = NOW()
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(note_id)
    .bind(user_id)
    .bind(&title)
    .bind(&content)
    .fetch_optional(pool().await?)
    .await
    .map_err(server_error)?;

    let Some(row) = row else {
        return Err(ServerFnError::new("Note not found"));
    };

    tracing::info!(user_id = %user_id, note_id = %row.id, "note updated");
    row.into_note().map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/update")]
pub async fn update_note(
    id: String,
    title: String,
    content: String,
) -> Result<Note, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete one of the signed-in user's notes.
#[cfg(feature = "server")]
#[post("/api/notes/delete", session: tower_sessions::Session)]
pub async fn delete_note(id: String) -> Result<(), ServerFnError> {
    let user_id = auth::require_user_id(&session).await?;
    let note_id =
        uuid::Uuid::parse_str(&id).map_err(|_| ServerFnError::new("Note not found"))?;

    let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
        .bind(note_id)
        .bind(user_id)
        .execute(pool().await?)
        .await
        .map_err(server_error)?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new("Note not found"));
    }

    tracing::info!(user_id = %user_id, note_id = %note_id, "note deleted");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notes/delete")]
pub async fn delete_note(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
