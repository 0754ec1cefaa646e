//! Shared API client constructor for all views.

/// The notes API the views talk to.
///
/// Every platform goes through the fullstack server functions; the session
/// cookie carries the signed-in user, so a fresh client per call is fine.
pub fn make_api() -> impl store::NotesApi {
    api::ServerApi::new()
}
