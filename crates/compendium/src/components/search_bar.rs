use dioxus::prelude::*;

/// Search input; every keystroke is a new query
#[component]
pub fn SearchBar(value: String, on_change: EventHandler<String>) -> Element {
    let has_query = !value.is_empty();

    rsx! {
        div { class: "cp-search",
            label { class: "cp-search-label", r#for: "cp-search-input", "Search" }
            div { class: "cp-search-input-row",
                input {
                    id: "cp-search-input",
                    class: "cp-search-input",
                    r#type: "text",
                    placeholder: "Search components…",
                    autocomplete: "off",
                    value: "{value}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
                if has_query {
                    button {
                        class: "cp-search-clear",
                        title: "Clear search",
                        onclick: move |_| on_change.call(String::new()),
                        "×"
                    }
                }
            }
        }
    }
}
