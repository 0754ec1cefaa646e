use dioxus::prelude::*;
use store::{Note, NoteId};

use crate::icons::{FaMagnifyingGlass, FaTrashCan};
use crate::{EmptyState, Icon};

/// Searchable list of notes.
///
/// Typing in the search box filters locally through `on_query`. Pressing
/// Enter or the Search button asks the parent to re-query the server.
#[component]
pub fn NoteList(
    notes: Vec<Note>,
    selected_id: Option<NoteId>,
    query: String,
    loading: bool,
    error: Option<String>,
    on_query: EventHandler<String>,
    on_search: EventHandler<()>,
    on_select: EventHandler<Note>,
    on_delete: EventHandler<Note>,
) -> Element {
    rsx! {
        div {
            class: "note-list",

            div {
                class: "note-search",
                input {
                    class: "note-search-input",
                    r#type: "search",
                    placeholder: "Search notes...",
                    value: "{query}",
                    oninput: move |evt: FormEvent| on_query.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_search.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_search.call(()),
                    Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                    "Search"
                }
            }

            if let Some(error) = error {
                div { class: "note-error", role: "alert", "{error}" }
            }

            if notes.is_empty() && !loading {
                EmptyState { title: "No notes found." }
            } else {
                ul {
                    class: "note-items",
                    for note in notes {
                        NoteListItem {
                            key: "{note.id}",
                            selected: selected_id.as_ref() == Some(&note.id),
                            note: note.clone(),
                            on_select,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteListItem(
    note: Note,
    selected: bool,
    on_select: EventHandler<Note>,
    on_delete: EventHandler<Note>,
) -> Element {
    let title = note.display_title().to_string();
    let class = if selected {
        "note-item note-item-selected"
    } else {
        "note-item"
    };
    let select_note = note.clone();

    rsx! {
        li {
            class: "{class}",
            onclick: move |_| on_select.call(select_note.clone()),
            div {
                class: "note-item-body",
                span { class: "note-item-title", "{title}" }
                span { class: "note-item-preview", "{note.content}" }
            }
            button {
                class: "btn btn-ghost btn-danger",
                title: "Delete note",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_delete.call(note.clone());
                },
                Icon { icon: FaTrashCan, width: 12, height: 12 }
                "Delete"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading_list() -> Element {
        rsx! {
            NoteList {
                notes: Vec::new(),
                selected_id: None,
                query: String::new(),
                loading: true,
                error: None,
                on_query: |_| {},
                on_search: |_| {},
                on_select: |_| {},
                on_delete: |_| {},
            }
        }
    }

    #[test]
    fn search_stays_enabled_while_loading() {
        let mut dom = VirtualDom::new(loading_list);
        dom.rebuild_in_place();
        let html = dioxus::ssr::render(&dom);
        assert!(html.contains("Search"));
        assert!(!html.contains("disabled"));
    }
}
