use dioxus::prelude::*;

/// Top bar with the product name; `children` fill the right-hand side
#[component]
pub fn AppBar(children: Element) -> Element {
    rsx! {
        header { class: "cp-appbar",
            div { class: "cp-appbar-brand",
                span { class: "cp-appbar-title", "Compendium" }
                span { class: "cp-appbar-subtitle", "Component catalog" }
            }
            div { class: "cp-appbar-actions", {children} }
        }
    }
}
