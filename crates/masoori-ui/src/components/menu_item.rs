//! Menu row with a hover highlight.

use dioxus::prelude::*;

#[component]
pub fn MenuItem(
    label: String,
    /// Rows without a handler are shown but do nothing
    #[props(default)]
    onclick: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "menu-item",
            role: "button",
            onclick: move |_| {
                match &onclick {
                    Some(handler) => handler.call(()),
                    None => tracing::debug!("Menu item {} has no action", label),
                }
            },
            "{label}"
        }
    }
}
