//! View components for the tarot pages.
//!
//! Each component is a function of its props. The only state they see is
//! what the owning page passes in.

mod alert_modal;
mod ghost_modal;
mod hashtag;
mod menu_item;
mod overlay_layer;
mod tarot_card;
mod text_bubble;

pub use alert_modal::*;
pub use ghost_modal::*;
pub use hashtag::*;
pub use menu_item::*;
pub use overlay_layer::*;
pub use tarot_card::*;
pub use text_bubble::*;
