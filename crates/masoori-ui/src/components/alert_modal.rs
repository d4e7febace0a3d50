//! Alert Modal Component
//!
//! Two-section dialog: an upper section with an image and two lines of text,
//! and a lower section whose text works as a link. All colours, sizes and
//! weights are props so the same modal can announce different rewards.

use dioxus::prelude::*;

/// Text styling for one line of the modal
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AlertText {
    pub text: String,
    pub color: String,
    pub font_size: String,
    pub font_weight: String,
    /// Vertical padding
    pub padding_top_bottom: String,
    pub padding_left_right: String,
}

impl AlertText {
    pub fn new(text: impl Into<String>, color: &str, font_size: &str, font_weight: &str) -> Self {
        Self {
            text: text.into(),
            color: color.to_string(),
            font_size: font_size.to_string(),
            font_weight: font_weight.to_string(),
            padding_top_bottom: "0px".to_string(),
            padding_left_right: "0px".to_string(),
        }
    }

    pub fn with_padding(mut self, top_bottom: &str, left_right: &str) -> Self {
        self.padding_top_bottom = top_bottom.to_string();
        self.padding_left_right = left_right.to_string();
        self
    }

    pub fn css(&self) -> String {
        format!(
            "color: {}; font-size: {}; font-weight: {}; padding: {} {};",
            self.color,
            self.font_size,
            css_font_weight(&self.font_weight),
            self.padding_top_bottom,
            self.padding_left_right
        )
    }
}

/// Map the named weights used by callers onto CSS values.
///
/// `medium` is not a CSS keyword, so it becomes 500. Anything else passes through.
pub fn css_font_weight(weight: &str) -> &str {
    match weight {
        "medium" => "500",
        "regular" => "400",
        "semibold" => "600",
        other => other,
    }
}

/// Properties for the AlertModal component
#[derive(Clone, PartialEq, Props)]
pub struct AlertModalProps {
    #[props(default = "600px".to_string())]
    pub width: String,
    pub top: AlertText,
    pub middle: AlertText,
    pub bottom: AlertText,
    /// Image shown in the upper section
    pub image_url: String,
    pub upper_section_background: String,
    pub lower_section_background: String,
    #[props(default = 3)]
    pub z_index: u8,
    /// Route opened from the lower section
    pub router_link: String,
    /// Called with `router_link` when the lower section is clicked
    pub on_link: EventHandler<String>,
}

#[component]
pub fn AlertModal(props: AlertModalProps) -> Element {
    let container = format!(
        "width: {}; z-index: {}; border-radius: 20px; overflow: hidden;",
        props.width, props.z_index
    );
    let upper = format!(
        "background: {}; display: flex; flex-direction: column; align-items: center; padding: 20px;",
        props.upper_section_background
    );
    let lower = format!(
        "background: {}; text-align: center; padding: 20px; cursor: pointer;",
        props.lower_section_background
    );
    let top_css = props.top.css();
    let middle_css = props.middle.css();
    let bottom_css = props.bottom.css();
    let link = props.router_link.clone();

    rsx! {
        div { class: "alert-modal", style: "{container}",
            div { class: "alert-modal-upper", style: "{upper}",
                div { style: "{top_css}", "{props.top.text}" }
                img { class: "alert-modal-image", src: "{props.image_url}", alt: "" }
                div { style: "{middle_css}", "{props.middle.text}" }
            }
            div {
                class: "alert-modal-lower",
                style: "{lower}",
                onclick: move |_| props.on_link.call(link.clone()),
                div { style: "{bottom_css}", "{props.bottom.text}" }
            }
        }
    }
}
