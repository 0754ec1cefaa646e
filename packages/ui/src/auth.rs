//! Authentication context and hooks for the UI.
//!
//! There is exactly one source of truth for "who is signed in": the
//! `Signal<AuthState>` provided by [`AuthProvider`]. It is filled once when the
//! provider mounts, refreshed after a login or signup, and cleared on logout.
//! Views read it through [`use_auth`] instead of fetching the profile
//! themselves.

use dioxus::prelude::*;
use store::{NotesApi, Profile};

use crate::make_api;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub profile: Option<Profile>,
    /// True until the first profile fetch has resolved.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn resolved(profile: Option<Profile>) -> Self {
        Self {
            profile,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    /// Text of the account link in the notes header.
    pub fn account_label(&self) -> &str {
        match (&self.profile, self.loading) {
            (_, true) => "Checking...",
            (Some(profile), false) => &profile.email,
            (None, false) => "Sign In / Up",
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Re-read the profile from the server into the auth context.
pub async fn refresh_profile(mut auth: Signal<AuthState>) {
    let profile = match make_api().get_profile().await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!("Failed to fetch profile: {}", e);
            None
        }
    };
    auth.set(AuthState::resolved(profile));
}

/// End the session. The local profile is cleared even if the server call fails.
pub async fn sign_out(mut auth: Signal<AuthState>) {
    if let Err(e) = make_api().logout().await {
        tracing::warn!("Logout request failed: {}", e);
    }
    auth.set(AuthState::signed_out());
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    // Fetch the current profile once on mount
    let _ = use_resource(move || refresh_profile(auth_state));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| sign_out(auth),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_label_follows_state() {
        assert_eq!(AuthState::default().account_label(), "Checking...");
        assert_eq!(AuthState::signed_out().account_label(), "Sign In / Up");

        let signed_in = AuthState::resolved(Some(Profile {
            id: "u1".to_string(),
            email: "me@example.com".to_string(),
        }));
        assert_eq!(signed_in.account_label(), "me@example.com");
    }
}
