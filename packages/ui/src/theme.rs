use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Colors, typography and the scrollable page body.
#[component]
pub fn CommandsTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}
