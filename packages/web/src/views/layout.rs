use dioxus::prelude::*;
use ui::AppSidebar;

use crate::Route;

/// Sidebar shell around every page.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "app-shell",
            AppSidebar {
                on_navigate_notes: move |_| {
                    nav.push(Route::Home {});
                },
                on_navigate_auth: move |_| {
                    nav.push(Route::Auth {});
                },
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
