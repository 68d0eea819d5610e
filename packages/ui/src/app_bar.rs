use dioxus::prelude::*;

const APP_BAR_CSS: Asset = asset!("/assets/styling/app_bar.css");

pub const APP_TITLE: &str = "Hoyo Buddy Commands";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const EXTERNAL_LINKS: [ExternalLink; 3] = [
    ExternalLink {
        label: "Official website",
        icon: "🌐",
        url: "https://seria.is-a.dev/hoyo-buddy/",
    },
    ExternalLink {
        label: "Source code",
        icon: "</>",
        url: "https://github.com/seriaati/hoyo-buddy",
    },
    ExternalLink {
        label: "Get started",
        icon: "▶",
        url: "https://github.com/seriaati/hoyo-buddy/wiki/Getting-Started",
    },
];

/// Title bar with an overflow menu of outbound links. Links open in a new
/// browser context; the desktop webview hands them to the system browser.
#[component]
pub fn AppBar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: APP_BAR_CSS }
        document::Title { "{APP_TITLE}" }

        header { class: "app_bar",
            h1 { class: "app_bar_title", "{APP_TITLE}" }
            div { class: "overflow_menu",
                button {
                    class: "overflow_btn",
                    "aria-label": "More",
                    "aria-expanded": "{open}",
                    onclick: move |_| {
                        let next = !open();
                        open.set(next);
                    },
                    "⋮"
                }
                if open() {
                    div { class: "dropdown", role: "menu",
                        for link in EXTERNAL_LINKS {
                            a {
                                key: "{link.url}",
                                class: "dropdown_item",
                                role: "menuitem",
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                onclick: move |_| open.set(false),
                                span { class: "dropdown_icon", "{link.icon}" }
                                span { "{link.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
