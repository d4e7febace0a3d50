//! Masoori Core Library
//!
//! Everything behind the tarot-card screens that is not a view: the card info
//! model, the overlay visibility state used by the modal pages, a read-only
//! presenter over the card info, and the HTTP client for the card API.
//!
//! ## Quick Start
//!
//! ```ignore
//! use masoori_core::{ApiClient, ApiConfig, CardView, ConsumeId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::new("http://localhost:8080"))?;
//!     let info = client.get_consume(ConsumeId(4)).await?;
//!
//!     let view = CardView::from(&info);
//!     println!("{}", view.bottom_text());
//!     for tag in view.hashtags() {
//!         println!("{}", tag.label());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod load;
pub mod logging;
pub mod overlay;
pub mod presenter;
pub mod types;

// Re-exports
pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{CoreError, CoreResult};
pub use load::{LoadState, RequestGeneration, RequestTicket, SpendSlot};
pub use overlay::{Overlay, OverlayStacking, OverlayVisibility};
pub use presenter::{CardView, Hashtag};
pub use types::*;
