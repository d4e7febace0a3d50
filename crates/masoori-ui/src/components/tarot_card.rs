//! Tarot Card Component
//!
//! A card frame image layered over the card artwork, with the card name
//! printed underneath.

use dioxus::prelude::*;

/// Colour of the card name under the frame
pub const TAROT_TEXT_COLOR: &str = "#5e3a66";

/// Properties for the TarotCard component
#[derive(Clone, PartialEq, Props)]
pub struct TarotCardProps {
    /// Outer width, e.g. "300px"
    pub width: String,
    /// Outer height, e.g. "402px"
    pub height: String,
    /// Width of the frame image
    #[props(default = "100%".to_string())]
    pub card_width: String,
    /// Frame image drawn on top
    pub card_src: String,
    /// Artwork drawn under the frame
    pub image_src: String,
    #[props(default = "100%".to_string())]
    pub bottom_image_width: String,
    /// Text under the card (the card name). May be empty before load.
    #[props(default)]
    pub text: String,
    #[props(default = "20px".to_string())]
    pub font_size: String,
}

/// Inline styles for the card's parts, derived only from props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotCardStyles {
    pub container: String,
    pub top: String,
    pub top_image: String,
    pub bottom: String,
    pub bottom_image: String,
    pub text: String,
}

impl TarotCardStyles {
    pub fn from_props(props: &TarotCardProps) -> Self {
        Self {
            container: format!(
                "width: {}; height: {}; position: relative;",
                props.width, props.height
            ),
            top: format!(
                "width: {}; height: auto; position: absolute; z-index: 1;",
                props.card_width
            ),
            top_image: format!("width: {}; height: auto;", props.card_width),
            bottom: "width: 97.5%; position: relative; z-index: 0; margin: 0 auto; height: 100%; overflow: hidden;"
                .to_string(),
            bottom_image: format!("width: {}; height: auto;", props.bottom_image_width),
            text: format!(
                "position: relative; z-index: 1; font-size: {}; color: {};",
                props.font_size, TAROT_TEXT_COLOR
            ),
        }
    }
}

/// Tarot card visual
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TarotCard {
///         width: "300px".to_string(),
///         height: "402px".to_string(),
///         card_src: asset_path("tarotCardFront.png"),
///         image_src: asset_path("tarotCardBack.png"),
///         text: view.bottom_text().to_string(),
///     }
/// }
/// ```
#[component]
pub fn TarotCard(props: TarotCardProps) -> Element {
    let styles = TarotCardStyles::from_props(&props);

    rsx! {
        div { class: "tarot-card", style: "{styles.container}",
            div { class: "tarot-card-top", style: "{styles.top}",
                img { src: "{props.card_src}", style: "{styles.top_image}", alt: "" }
            }
            div { class: "tarot-card-bottom", style: "{styles.bottom}",
                img { src: "{props.image_src}", style: "{styles.bottom_image}", alt: "" }
            }
            div { class: "tarot-card-text", style: "{styles.text}", "{props.text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> TarotCardProps {
        TarotCardProps {
            width: "300px".to_string(),
            height: "402px".to_string(),
            card_width: "100%".to_string(),
            card_src: "front.png".to_string(),
            image_src: "back.png".to_string(),
            bottom_image_width: "90%".to_string(),
            text: "The Fool".to_string(),
            font_size: "20px".to_string(),
        }
    }

    #[test]
    fn frame_sits_above_artwork() {
        let styles = TarotCardStyles::from_props(&props());
        assert!(styles.top.contains("z-index: 1"));
        assert!(styles.bottom.contains("z-index: 0"));
        assert!(styles.bottom.contains("overflow: hidden"));
    }

    #[test]
    fn sizes_come_from_props() {
        let styles = TarotCardStyles::from_props(&props());
        assert_eq!(styles.container, "width: 300px; height: 402px; position: relative;");
        assert_eq!(styles.bottom_image, "width: 90%; height: auto;");
        assert!(styles.text.contains("font-size: 20px"));
        assert!(styles.text.contains(TAROT_TEXT_COLOR));
    }
}
