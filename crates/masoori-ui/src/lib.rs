//! Masoori UI Components
//!
//! Dioxus components for the tarot-card screens: the card itself, keyword
//! chips, text bubbles, the alert and share dialogs, and the overlay layer
//! that pairs each dialog with its backdrop.
//!
//! Prop-driven styles are computed by plain functions (`*_style`, `css()`)
//! so they can be checked without a renderer. Static styles live in the
//! app's global stylesheet under the class names used here.

pub mod components;

pub use components::*;
