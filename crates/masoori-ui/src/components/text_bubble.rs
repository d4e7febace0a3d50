//! Text Bubble Component
//!
//! Rounded translucent box used for the witch badge, the card description and
//! the clickable choices on the spend-pattern page. Every visual property is
//! data; the presets cover the three bubbles the pages use.

use dioxus::prelude::*;

/// Background shared by every bubble on the spend page
pub const BUBBLE_BACKGROUND: &str = "#4D1B2D80";

/// Bubble presets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BubbleKind {
    /// Small witch name badge
    Badge,
    /// Large non-interactive text block
    #[default]
    Content,
    /// Clickable choice
    Choice,
}

/// Every visual property of a bubble
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BubbleStyle {
    pub width: String,
    pub background: String,
    pub opacity: String,
    pub padding_left_right: String,
    pub padding_top_bottom: String,
    pub border_radius: String,
    /// Highlight on hover and show a pointer cursor
    pub hoverable: bool,
}

impl BubbleKind {
    pub fn style(&self) -> BubbleStyle {
        let (width, lr, tb, radius, hoverable) = match self {
            BubbleKind::Badge => ("136px", "28px", "15px", "10px", false),
            BubbleKind::Content => ("650px", "40px", "40px", "20px", false),
            BubbleKind::Choice => ("650px", "40px", "20px", "20px", true),
        };
        BubbleStyle {
            width: width.to_string(),
            background: BUBBLE_BACKGROUND.to_string(),
            opacity: "1".to_string(),
            padding_left_right: lr.to_string(),
            padding_top_bottom: tb.to_string(),
            border_radius: radius.to_string(),
            hoverable,
        }
    }
}

impl BubbleStyle {
    /// Inline CSS for the bubble
    pub fn css(&self) -> String {
        let cursor = if self.hoverable { "pointer" } else { "default" };
        format!(
            "width: {}; background: {}; opacity: {}; padding: {} {}; border-radius: {}; white-space: pre-line; cursor: {};",
            self.width,
            self.background,
            self.opacity,
            self.padding_top_bottom,
            self.padding_left_right,
            self.border_radius,
            cursor
        )
    }

    pub fn class(&self) -> &'static str {
        if self.hoverable {
            "text-bubble hoverable"
        } else {
            "text-bubble"
        }
    }
}

/// Properties for the TextBubble component
#[derive(Clone, PartialEq, Props)]
pub struct TextBubbleProps {
    /// Bubble text; newlines are kept as line breaks
    pub text: String,
    #[props(default)]
    pub kind: BubbleKind,
    /// Replaces the preset entirely when set
    #[props(default)]
    pub style: Option<BubbleStyle>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextBubble { kind: BubbleKind::Badge, text: "witch".to_string() }
///     TextBubble {
///         kind: BubbleKind::Choice,
///         text: "share my card".to_string(),
///         onclick: move |_| share.write().open(),
///     }
/// }
/// ```
#[component]
pub fn TextBubble(props: TextBubbleProps) -> Element {
    let style = props.style.clone().unwrap_or_else(|| props.kind.style());
    let css = style.css();
    let class = style.class();

    rsx! {
        div {
            class: "{class}",
            style: "{css}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            "{props.text}"
        }
    }
}
