//! Session helpers for server functions.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;
use uuid::Uuid;

/// Key for storing the user id in the session.
const SESSION_USER_ID_KEY: &str = "user_id";

/// The signed-in user's id, or `None` for an anonymous session.
pub async fn session_user_id(session: &Session) -> Result<Option<Uuid>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    Uuid::parse_str(&user_id)
        .map(Some)
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Like [`session_user_id`], but anonymous sessions are an error.
pub async fn require_user_id(session: &Session) -> Result<Uuid, ServerFnError> {
    session_user_id(session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// Bind `user_id` to the session under a fresh session id.
pub async fn start_session(session: &Session, user_id: Uuid) -> Result<(), ServerFnError> {
    session
        .cycle_id()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(SESSION_USER_ID_KEY, user_id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
