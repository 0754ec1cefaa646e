use dioxus::prelude::*;
use store::{EditTarget, NotesApi, NotesState};

use crate::{make_api, use_auth, AuthState, NoteEditor, NoteList, NOTES_CSS};

/// Re-query the server with the current search query.
pub async fn load_notes(mut state: Signal<NotesState>) {
    let query = state.write().begin_load();
    tracing::debug!(query = ?query, "loading notes");
    let result = make_api().fetch_notes(query.as_deref()).await;
    if let Err(e) = &result {
        tracing::warn!("Failed to load notes: {}", e);
    }
    state.write().finish_load(result);
}

/// Persist the edit buffer as a new or updated note.
pub async fn save_note(mut state: Signal<NotesState>, auth: Signal<AuthState>) {
    let profile = auth.peek().profile.clone();
    let Ok(request) = state.write().begin_save(profile.as_ref()) else {
        return;
    };
    let result = request.send(&make_api()).await;
    if let Err(e) = &result {
        tracing::error!("Failed to save note: {}", e);
    }
    state.write().finish_save(&request, result);
}

/// Delete `target` on the server and drop it from the list.
pub async fn delete_note(
    mut state: Signal<NotesState>,
    auth: Signal<AuthState>,
    target: EditTarget,
) {
    let profile = auth.peek().profile.clone();
    let Ok(id) = state.write().begin_delete(&target, profile.as_ref()) else {
        return;
    };
    let result = make_api().delete_note(&id).await;
    if let Err(e) = &result {
        tracing::error!(note_id = %id, "Failed to delete note: {}", e);
    }
    state.write().finish_delete(&id, result);
}

/// The notes page: list, search and editor.
///
/// All requests run as tasks owned by this component, so leaving the page
/// cancels whatever is still in flight.
#[component]
pub fn NotesView(on_open_auth: EventHandler<()>) -> Element {
    let mut state = use_signal(NotesState::new);
    let auth = use_auth();
    let mut saving = use_signal(|| false);

    // Initial load, independent of the profile fetch
    let _ = use_resource(move || load_notes(state));

    let snapshot = state.read();
    let filtered: Vec<_> = snapshot.filtered().into_iter().cloned().collect();
    let count = filtered.len();
    let selected_id = snapshot
        .selected
        .as_ref()
        .and_then(EditTarget::id)
        .cloned();
    let draft = snapshot.selected.as_ref().is_some_and(EditTarget::is_draft);
    let deletable = snapshot.has_selection();
    let query = snapshot.query.clone();
    let loading = snapshot.loading;
    let error = snapshot.error.clone();
    let edit_title = snapshot.edit_title.clone();
    let edit_content = snapshot.edit_content.clone();
    drop(snapshot);

    let auth_state = auth();
    let signed_in = auth_state.profile.is_some();
    let account_label = auth_state.account_label().to_string();

    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        div {
            class: "notes-page",

            header {
                class: "notes-header",
                div {
                    h2 { "Your Notes" }
                    p {
                        class: "notes-count",
                        if loading { "Loading..." } else { "{count} notes" }
                    }
                }
                div {
                    class: "notes-header-actions",
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_open_auth.call(()),
                        "{account_label}"
                    }
                    button {
                        class: "btn btn-accent",
                        onclick: move |_| state.write().start_new_note(),
                        "New Note"
                    }
                }
            }

            section {
                class: "notes-grid",

                div {
                    class: "card",
                    NoteList {
                        notes: filtered,
                        selected_id,
                        query,
                        loading,
                        error,
                        on_query: move |q: String| state.write().set_query(q),
                        on_search: move |_| {
                            spawn(load_notes(state));
                        },
                        on_select: move |note| state.write().select_note(&note),
                        on_delete: move |note| {
                            spawn(delete_note(state, auth, EditTarget::Persisted(note)));
                        },
                    }
                }

                div {
                    class: "card",
                    NoteEditor {
                        title: edit_title,
                        content: edit_content,
                        draft,
                        deletable,
                        signed_in,
                        saving: saving(),
                        on_title_input: move |t: String| state.write().set_edit_title(t),
                        on_content_input: move |c: String| state.write().set_edit_content(c),
                        on_reset: move |_| state.write().reset_edits(),
                        on_save: move |_| {
                            spawn(async move {
                                saving.set(true);
                                save_note(state, auth).await;
                                saving.set(false);
                            });
                        },
                        on_delete: move |_| {
                            if let Some(target) = state.peek().selected.clone() {
                                spawn(delete_note(state, auth, target));
                            }
                        },
                    }
                }
            }
        }
    }
}
