use dioxus::prelude::*;

use crate::icons::{FaFloppyDisk, FaRotateLeft, FaTrashCan};
use crate::Icon;

/// Title and content editor bound to the page's edit buffer.
///
/// The editor owns no state; every keystroke goes back to the parent.
#[component]
pub fn NoteEditor(
    title: String,
    content: String,
    /// Whether the buffer belongs to an unsaved draft.
    #[props(default)]
    draft: bool,
    /// Whether anything is selected to delete.
    #[props(default)]
    deletable: bool,
    signed_in: bool,
    saving: bool,
    on_title_input: EventHandler<String>,
    on_content_input: EventHandler<String>,
    on_reset: EventHandler<()>,
    on_save: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "editor-container",

            div {
                class: "editor-header",
                input {
                    class: "editor-title",
                    r#type: "text",
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt: FormEvent| on_title_input.call(evt.value()),
                }
                if draft {
                    span { class: "editor-badge", "Draft" }
                }
                if deletable {
                    button {
                        class: "btn btn-ghost",
                        title: "Delete note",
                        onclick: move |_| on_delete.call(()),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }

            textarea {
                class: "editor-content",
                placeholder: "Write your note here...",
                value: "{content}",
                oninput: move |evt: FormEvent| on_content_input.call(evt.value()),
            }

            div {
                class: "editor-actions",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_reset.call(()),
                    Icon { icon: FaRotateLeft, width: 12, height: 12 }
                    "Reset"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    Icon { icon: FaFloppyDisk, width: 12, height: 12 }
                    "Save"
                }
            }

            if !signed_in {
                p { class: "editor-tip", "Tip: Sign in to persist your notes to the backend." }
            }
        }
    }
}
