use dioxus::prelude::*;

use crate::NOTES_CSS;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application shell sidebar: brand, navigation and footer.
///
/// Navigation is delegated to the platform package, which owns the router.
#[component]
pub fn AppSidebar(
    on_navigate_notes: EventHandler<()>,
    on_navigate_auth: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: NOTES_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                div { class: "sidebar-brand-mark" }
                h1 { aria_label: "App name", "Notes" }
            }

            nav {
                class: "sidebar-nav",
                button {
                    class: "sidebar-link",
                    onclick: move |_| on_navigate_notes.call(()),
                    "All Notes"
                }
                button {
                    class: "sidebar-link",
                    onclick: move |_| on_navigate_auth.call(()),
                    "Sign In / Up"
                }
            }

            div {
                class: "sidebar-about",
                span { class: "badge", "Light \u{2022} Minimal" }
                p { "Organize your thoughts with a clean, distraction-free UI." }
            }

            footer {
                class: "sidebar-footer",
                p { "v{VERSION}" }
            }
        }
    }
}
