use dioxus::prelude::*;
use store::{authenticate, AuthMode, Credentials, Operation};

use crate::{make_api, use_auth, AuthState, SignOutButton, NOTES_CSS};

/// Sign in, sign up and sign out.
#[component]
pub fn AuthView() -> Element {
    let mut auth = use_auth();
    let mut mode = use_signal(AuthMode::default);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_| async move {
        let credentials = match Credentials::new(email(), password()) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        busy.set(true);
        error.set(None);
        match authenticate(&make_api(), mode(), &credentials).await {
            Ok(profile) => {
                tracing::info!("authenticated");
                auth.set(AuthState::resolved(profile));
                email.set(String::new());
                password.set(String::new());
            }
            Err(e) => {
                tracing::warn!("Authentication failed: {}", e);
                error.set(Some(e.user_message(Operation::Authenticate)));
            }
        }
        busy.set(false);
    };

    let state = auth();
    let status = match (&state.profile, state.loading) {
        (_, true) => "Checking session...".to_string(),
        (Some(profile), false) => format!("Signed in as {}", profile.email),
        (None, false) => "You are not signed in.".to_string(),
    };
    let mode_class = |m: AuthMode| {
        if mode() == m {
            "btn btn-outline btn-active"
        } else {
            "btn btn-outline"
        }
    };

    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        div {
            class: "auth-page",

            header {
                h2 { "Authentication" }
                p { class: "auth-status", "{status}" }
            }

            div {
                class: "card",
                if let Some(profile) = state.profile.clone() {
                    div {
                        class: "auth-account",
                        div {
                            p { class: "auth-email", "{profile.email}" }
                            p { class: "auth-hint", "You are authenticated." }
                        }
                        SignOutButton { class: "btn btn-outline" }
                    }
                } else {
                    div {
                        class: "auth-modes",
                        button {
                            class: mode_class(AuthMode::SignIn),
                            onclick: move |_| mode.set(AuthMode::SignIn),
                            "Sign In"
                        }
                        button {
                            class: mode_class(AuthMode::SignUp),
                            onclick: move |_| mode.set(AuthMode::SignUp),
                            "Sign Up"
                        }
                    }

                    div {
                        class: "auth-form",
                        input {
                            class: "input",
                            r#type: "email",
                            placeholder: "Email address",
                            autocomplete: "email",
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        input {
                            class: "input",
                            r#type: "password",
                            placeholder: "Password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(message) = error() {
                            div { class: "note-error", role: "alert", "{message}" }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: busy(),
                            onclick: handle_submit,
                            if busy() { "Please wait..." } else { "{mode().submit_label()}" }
                        }
                        p {
                            class: "auth-hint",
                            "After signing in, return to the notes list to create and save notes."
                        }
                    }
                }
            }
        }
    }
}
