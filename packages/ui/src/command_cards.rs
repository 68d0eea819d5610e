use api::FetchError;
use dioxus::prelude::*;

use crate::page_state::CardView;

const SKELETON_CARDS: usize = 6;

/// Wrapping grid of command cards. Keys carry the request generation so a
/// new listing replaces every card instead of patching the old ones.
#[component]
pub fn CommandGrid(cards: Vec<CardView>, generation: u64) -> Element {
    if cards.is_empty() {
        return rsx! { p { class: "hint", "No commands available for this language." } };
    }

    rsx! {
        div { class: "card_grid",
            for card in cards {
                CommandCard {
                    key: "{generation}-{card.name}",
                    name: card.name.clone(),
                    description: card.description.clone(),
                }
            }
        }
    }
}

#[component]
pub fn CommandCard(name: String, description: String) -> Element {
    rsx! {
        div { class: "command_card",
            h3 { class: "command_name", "{name}" }
            p { class: "command_description", "{description}" }
        }
    }
}

#[component]
pub fn CommandGridSkeleton() -> Element {
    rsx! {
        p { class: "hint", role: "status", "Loading…" }
        div { class: "card_grid",
            for i in 0..SKELETON_CARDS {
                div { key: "{i}", class: "command_card skeleton",
                    h3 { class: "command_name", "…" }
                    p { class: "command_description", "…" }
                }
            }
        }
    }
}

/// Replaces the grid when a listing could not be loaded.
#[component]
pub fn FetchErrorPanel(error: FetchError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "panel error_panel", role: "alert",
            h2 { "Could not load commands" }
            p { class: "error", "{error}" }
            if !error.is_transient() {
                p { class: "hint", "Retrying is unlikely to help until the service is fixed." }
            }
            button { class: "btn primary", onclick: move |_| on_retry.call(()), "Retry" }
        }
    }
}
