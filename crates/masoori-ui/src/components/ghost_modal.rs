//! Ghost Modal Component
//!
//! Share dialog presented by the ghost: copy the card summary, or close.

use dioxus::prelude::*;

/// Default ink of the close glyph, matching the dialog text
pub const CLOSE_INK: &str = "#5E3A66";

const TITLE: &str = "Share your card with friends";
const COPY_LABEL: &str = "Copy card summary";

/// Inline style of the round close control drawn in `ink`
pub fn close_button_style(ink: &str) -> String {
    format!(
        "width: 36px; height: 36px; border-radius: 50%; border: 1px solid {ink}; background: transparent; color: {ink}; font-size: 22px; line-height: 1; cursor: pointer;"
    )
}

/// Round "×" control that closes a dialog.
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    #[props(default = CLOSE_INK.to_string())] ink: String,
) -> Element {
    let style = close_button_style(&ink);

    rsx! {
        button {
            class: "close-btn",
            r#type: "button",
            style: "{style}",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

/// Properties for the GhostModal component
#[derive(Clone, PartialEq, Props)]
pub struct GhostModalProps {
    #[props(default = 3)]
    pub z_index: u8,
    /// Ghost illustration
    #[props(default)]
    pub image_url: Option<String>,
    /// Card summary shown in the dialog and copied by the copy action
    pub share_text: String,
    /// Closes the dialog (the owning page flips its overlay)
    pub toggle_modal: EventHandler<()>,
    /// Called with `share_text` when the copy action is clicked
    pub on_copy: EventHandler<String>,
}

#[component]
pub fn GhostModal(props: GhostModalProps) -> Element {
    let share_text = props.share_text.clone();

    rsx! {
        div { class: "ghost-modal", style: "z-index: {props.z_index};",
            div { class: "ghost-modal-header",
                CloseButton { onclick: move |_| props.toggle_modal.call(()) }
            }
            if let Some(ref src) = props.image_url {
                img { class: "ghost-modal-image", src: "{src}", alt: "" }
            }
            p { class: "ghost-modal-title", "{TITLE}" }
            p { class: "ghost-modal-summary", "{props.share_text}" }
            button {
                class: "ghost-modal-copy",
                onclick: move |_| props.on_copy.call(share_text.clone()),
                "{COPY_LABEL}"
            }
        }
    }
}
