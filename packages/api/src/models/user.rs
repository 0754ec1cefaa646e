//! # User model for authenticated accounts
//!
//! [`User`] is the complete row of the `users` table (server only). The
//! client never sees it: [`User::to_profile`] projects it into a
//! [`Profile`], which omits the password hash and timestamps and turns the
//! `Uuid` into a `String` so it works in WASM.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use store::Profile;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to a Profile for client consumption.
    pub fn to_profile(&self) -> Profile {
        Profile {
            id: self.id.to_string(),
            email: self.email.clone(),
        }
    }
}
