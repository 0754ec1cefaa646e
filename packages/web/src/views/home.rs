use dioxus::prelude::*;
use ui::views::NotesView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        NotesView {
            on_open_auth: move |_| {
                nav.push(Route::Auth {});
            },
        }
    }
}
