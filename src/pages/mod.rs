//! Page components for Masoori.

mod landing;
mod menu;
mod simple;
mod spend_pattern;

pub use landing::Landing;
pub use menu::Menu;
pub use simple::{Dictionary, Faq, Main};
pub use spend_pattern::{SpendPattern, SpendToday};
