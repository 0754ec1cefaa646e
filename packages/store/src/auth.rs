//! Sign-in and sign-up form logic.

use crate::backend::NotesApi;
use crate::error::{ApiError, NotesError};
use crate::models::Profile;

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }
}

/// Email and password that passed client-side validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Both fields must be non-empty. Anything stricter is the server's call.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, NotesError> {
        let email = email.into();
        let password = password.into();
        if email.trim().is_empty() || password.is_empty() {
            return Err(NotesError::MissingCredentials);
        }
        Ok(Self { email, password })
    }
}

/// Log in or sign up, then fetch the resulting profile.
pub async fn authenticate<A: NotesApi>(
    api: &A,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<Option<Profile>, ApiError> {
    match mode {
        AuthMode::SignIn => api.login(&credentials.email, &credentials.password).await?,
        AuthMode::SignUp => api.signup(&credentials.email, &credentials.password).await?,
    }
    api.get_profile().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryApi;

    #[test]
    fn both_fields_required() {
        assert_eq!(
            Credentials::new("", "secret"),
            Err(NotesError::MissingCredentials)
        );
        assert_eq!(
            Credentials::new("a@b.c", ""),
            Err(NotesError::MissingCredentials)
        );
        assert_eq!(
            NotesError::MissingCredentials.to_string(),
            "Email and password are required."
        );
        assert!(Credentials::new("a@b.c", "secret").is_ok());
    }

    #[tokio::test]
    async fn sign_up_then_sign_in() {
        let api = MemoryApi::new();
        let creds = Credentials::new("new@example.com", "correct horse").unwrap();

        let profile = authenticate(&api, AuthMode::SignUp, &creds).await.unwrap();
        assert_eq!(profile.map(|p| p.email).as_deref(), Some("new@example.com"));

        api.logout().await.unwrap();
        let profile = authenticate(&api, AuthMode::SignIn, &creds).await.unwrap();
        assert!(profile.is_some());
    }

    #[tokio::test]
    async fn failed_login_skips_profile_fetch() {
        let api = MemoryApi::new();
        let creds = Credentials::new("ghost@example.com", "pw").unwrap();
        let err = authenticate(&api, AuthMode::SignIn, &creds).await.unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Invalid email or password"));
        assert_eq!(api.calls(), 1);
    }

    #[test]
    fn submit_labels() {
        assert_eq!(AuthMode::default().submit_label(), "Sign In");
        assert_eq!(AuthMode::SignUp.submit_label(), "Create Account");
    }
}
