//! Spend pattern page - this week's tarot card.
//!
//! Loads the card for a consume id into the shared slot, then shows the card,
//! its keyword chips and the witch's reading. Two independent overlays hang
//! off the choice bubbles: the puzzle alert and the share dialog.

use dioxus::prelude::*;
use masoori_core::config::DEFAULT_CONSUME_ID;
use masoori_core::overlay::{Overlay, SPEND_CONTENT_LAYER};
use masoori_core::{CardView, ConsumeId, LoadState};
use masoori_ui::{
    AlertModal, AlertText, BackdropShade, BubbleKind, GhostModal, HashTagList, OverlayLayer,
    TarotCard, TextBubble,
};

use crate::app::route_for_path;
use crate::assets;
use crate::context::{use_get_consume_id, use_spend_info};
use crate::get_settings;
use crate::theme::colors::{LILAC_MIST, PLUM_DEEP};

const WITCH_BADGE: &str = "🌟 Witch 🌟";
const REACH_OUT: &str = "🔮 Reach out to the witch 🔮";
const SHARE_CARD: &str = "🃏 Share my card with others 🃏";

/// Where the puzzle alert leads
const PUZZLE_LINK: &str = "/dictionary";

/// `/spend` - the card for the consume id chosen at launch.
#[component]
pub fn SpendToday() -> Element {
    let consume_id = get_settings()
        .map(|s| s.default_consume_id)
        .unwrap_or(ConsumeId(DEFAULT_CONSUME_ID));

    rsx! {
        SpendPattern { consume_id }
    }
}

/// Status line under the hashtags while the card loads.
fn load_message(state: &LoadState) -> Option<String> {
    match state {
        LoadState::Loading => Some("The witch is reading your spending...".to_string()),
        LoadState::Failed(reason) => Some(format!("The crystal ball is cloudy ({})", reason)),
        LoadState::Idle | LoadState::Loaded => None,
    }
}

/// Put text on the desktop clipboard.
fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard.set_text(text).is_ok(),
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            false
        }
    }
}

/// `/spend/:consume_id` - the card for one consume id.
#[component]
pub fn SpendPattern(consume_id: ReadOnlySignal<ConsumeId>) -> Element {
    let navigator = use_navigator();
    let load_state = use_get_consume_id(consume_id);
    let info = use_spend_info().get();
    let view = CardView::from(&info);

    let mut share = use_signal(|| Overlay::with_layer(SPEND_CONTENT_LAYER));
    let mut puzzle = use_signal(|| Overlay::with_layer(SPEND_CONTENT_LAYER));

    let status = load_message(&load_state());
    let share_text = view.share_text();

    rsx! {
        div { class: "spend-page",
            div { class: "spend-content",
                div { class: "spend-card",
                    TarotCard {
                        width: "300px".to_string(),
                        height: "402px".to_string(),
                        card_src: assets::TAROT_CARD_FRONT.to_string(),
                        image_src: view.image_path().unwrap_or(assets::TAROT_CARD_BACK).to_string(),
                        text: view.bottom_text().to_string(),
                        font_size: "20px".to_string(),
                    }
                }

                div { class: "spend-details",
                    div { class: "spend-title", "This Week's Tarot Card" }
                    HashTagList { tags: view.hashtags() }
                    p { class: "load-status",
                        if let Some(message) = status {
                            "{message}"
                        }
                    }

                    div { class: "spend-bubbles",
                        TextBubble { kind: BubbleKind::Badge, text: WITCH_BADGE.to_string() }
                        TextBubble { kind: BubbleKind::Content, text: view.description() }
                        TextBubble {
                            kind: BubbleKind::Choice,
                            text: REACH_OUT.to_string(),
                            onclick: move |_| puzzle.write().open(),
                        }
                        TextBubble {
                            kind: BubbleKind::Choice,
                            text: SHARE_CARD.to_string(),
                            onclick: move |_| share.write().open(),
                        }
                    }
                }
            }

            OverlayLayer {
                overlay: share(),
                shade: BackdropShade::Dark,
                on_dismiss: move |_| share.write().close(),
                GhostModal {
                    z_index: SPEND_CONTENT_LAYER,
                    image_url: assets::GHOST.to_string(),
                    share_text,
                    toggle_modal: move |_| share.write().toggle(),
                    on_copy: move |text: String| {
                        if copy_to_clipboard(&text) {
                            tracing::info!("Copied card summary to clipboard");
                        }
                    },
                }
            }

            OverlayLayer {
                overlay: puzzle(),
                shade: BackdropShade::Dark,
                on_dismiss: move |_| puzzle.write().close(),
                AlertModal {
                    width: "600px".to_string(),
                    top: AlertText::new("You found a puzzle piece", PLUM_DEEP, "28px", "bold")
                        .with_padding("20px", "0px"),
                    middle: AlertText::new("Shall we take a look together?", PLUM_DEEP, "18px", "medium")
                        .with_padding("6px", "0px"),
                    bottom: AlertText::new("See my progress", LILAC_MIST, "20px", "medium"),
                    image_url: assets::PUZZLE.to_string(),
                    upper_section_background: LILAC_MIST.to_string(),
                    lower_section_background: PLUM_DEEP.to_string(),
                    z_index: SPEND_CONTENT_LAYER,
                    router_link: PUZZLE_LINK.to_string(),
                    on_link: move |path: String| {
                        match route_for_path(&path) {
                            Some(route) => {
                                navigator.push(route);
                            }
                            None => tracing::warn!("No route for {}", path),
                        }
                    },
                }
            }
        }
    }
}
