use api::{Locale, LocaleTable};
use dioxus::prelude::*;

/// Language dropdown. Options are the display names from [`LocaleTable`];
/// the selected display name is passed to `on_select` as-is.
#[component]
pub fn LocaleSelect(value: Locale, on_select: EventHandler<String>) -> Element {
    let table = LocaleTable::global();
    let current = table.display_name(value);

    rsx! {
        div { class: "locale_select",
            label { r#for: "locale", "Language" }
            select {
                id: "locale",
                value: "{current}",
                onchange: move |e| on_select.call(e.value()),
                for (locale, name) in table.entries() {
                    option {
                        key: "{locale.code()}",
                        value: "{name}",
                        selected: locale == value,
                        "{name}"
                    }
                }
            }
        }
    }
}
