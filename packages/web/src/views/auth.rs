use dioxus::prelude::*;
use ui::views::AuthView;

#[component]
pub fn Auth() -> Element {
    rsx! {
        AuthView {}
    }
}
