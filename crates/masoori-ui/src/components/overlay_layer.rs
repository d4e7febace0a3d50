//! Overlay Layer Component
//!
//! Draws a backdrop and its modal content from a single [`Overlay`] value, so
//! the two can only appear and disappear together. Clicking the backdrop asks
//! the owning page to dismiss; the page decides what that means.

use dioxus::prelude::*;
use masoori_core::Overlay;

/// Dim level of the backdrop
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BackdropShade {
    /// 50% black (menu page)
    #[default]
    Light,
    /// 80% black (spend-pattern page)
    Dark,
}

impl BackdropShade {
    pub fn background(&self) -> &'static str {
        match self {
            BackdropShade::Light => "rgba(0, 0, 0, 0.5)",
            BackdropShade::Dark => "rgba(0, 0, 0, 0.8)",
        }
    }
}

/// Inline style of the backdrop for the current state
pub fn backdrop_style(overlay: &Overlay, shade: BackdropShade) -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: {}; display: {}; z-index: {};",
        shade.background(),
        overlay.display(),
        overlay.layer().backdrop
    )
}

/// Inline style of the centred content box for the current state
pub fn content_style(overlay: &Overlay) -> String {
    format!(
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); padding: 20px; display: {}; z-index: {};",
        overlay.display(),
        overlay.layer().content
    )
}

/// Properties for the OverlayLayer component
#[derive(Clone, PartialEq, Props)]
pub struct OverlayLayerProps {
    pub overlay: Overlay,
    #[props(default)]
    pub shade: BackdropShade,
    /// Backdrop was clicked
    pub on_dismiss: EventHandler<()>,
    pub children: Element,
}

/// # Example
///
/// ```rust,ignore
/// let mut profile = use_signal(Overlay::new);
///
/// rsx! {
///     OverlayLayer {
///         overlay: profile(),
///         on_dismiss: move |_| profile.write().close(),
///         ProfilePanel {}
///     }
/// }
/// ```
#[component]
pub fn OverlayLayer(props: OverlayLayerProps) -> Element {
    let backdrop = backdrop_style(&props.overlay, props.shade);
    let content = content_style(&props.overlay);

    rsx! {
        div { class: "overlay-content", style: "{content}", {props.children} }
        div {
            class: "overlay-backdrop",
            style: "{backdrop}",
            onclick: move |_| props.on_dismiss.call(()),
        }
    }
}
