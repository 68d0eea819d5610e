use dioxus::prelude::*;

#[component]
pub fn Commands() -> Element {
    rsx! { ui::CommandsPage {} }
}
