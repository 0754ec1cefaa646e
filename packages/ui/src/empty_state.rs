use dioxus::prelude::*;

/// Minimal reusable empty state.
#[component]
pub fn EmptyState(title: String, subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { class: "empty-state-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "empty-state-subtitle", "{subtitle}" }
            }
        }
    }
}
