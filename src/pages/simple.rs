//! Placeholder destinations reached from the menu and the puzzle alert.

use dioxus::prelude::*;
use masoori_ui::{BubbleKind, TextBubble};

use crate::app::Route;

#[component]
fn SimplePage(title: &'static str, blurb: &'static str) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "simple-page",
            h1 { "{title}" }
            p { "{blurb}" }
            TextBubble {
                kind: BubbleKind::Choice,
                text: "🌙 Back to the menu 🌙".to_string(),
                onclick: move |_| {
                    navigator.push(Route::Menu {});
                },
            }
        }
    }
}

#[component]
pub fn Main() -> Element {
    rsx! {
        SimplePage { title: "Main", blurb: "The witch's hut is still being built." }
    }
}

#[component]
pub fn Faq() -> Element {
    rsx! {
        SimplePage { title: "FAQ", blurb: "Questions for the witch will be answered here." }
    }
}

/// Where the puzzle alert sends the visitor.
#[component]
pub fn Dictionary() -> Element {
    rsx! {
        SimplePage { title: "Dictionary", blurb: "Your collected puzzle pieces will gather here." }
    }
}
