//! Menu page - navigation plus the "my page" overlay.

use dioxus::prelude::*;
use masoori_core::overlay::{Overlay, MENU_CONTENT_LAYER};
use masoori_core::CardView;
use masoori_ui::{BackdropShade, CloseButton, HashTagList, MenuItem, OverlayLayer};

use crate::app::Route;
use crate::context::use_spend_info;

/// Menu page component.
#[component]
pub fn Menu() -> Element {
    let navigator = use_navigator();
    let mut profile = use_signal(|| Overlay::with_layer(MENU_CONTENT_LAYER));

    rsx! {
        div { class: "menu-page",
            div { style: "width: 100%;",
                div { class: "menu-title" }

                MenuItem {
                    label: "MAIN".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::Main {});
                    },
                }
                MenuItem { label: "LOG OUT".to_string() }
                MenuItem {
                    label: "MY PAGE".to_string(),
                    onclick: move |_| profile.write().open(),
                }
                MenuItem {
                    label: "FAQ".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::Faq {});
                    },
                }

                OverlayLayer {
                    overlay: profile(),
                    shade: BackdropShade::Light,
                    on_dismiss: move |_| profile.write().close(),
                    ProfilePanel { on_close: move |_| profile.write().close() }
                }
            }
        }
    }
}

/// Summary of the visitor's most recent card, shown in the menu overlay.
#[component]
fn ProfilePanel(on_close: EventHandler<()>) -> Element {
    let info = use_spend_info().get();
    let view = CardView::from(&info);

    rsx! {
        div { class: "profile-panel",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { "My Page" }
                CloseButton { onclick: move |_| on_close.call(()) }
            }
            if view.is_empty() {
                p { "No card yet. Visit the witch to draw this week's card." }
            } else {
                p { "This week's card: {view.bottom_text()}" }
                HashTagList { tags: view.hashtags() }
            }
        }
    }
}
