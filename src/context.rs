//! Shared state for the tarot pages.
//!
//! - [`SpendInfoState`] is the per-session card slot. Any component may read
//!   it; only [`use_get_consume_id`] writes it, and only with the result of
//!   its newest request.
//! - [`ApiHandle`] carries the card API client chosen at launch.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(SpendInfoState::new);
//!
//! // In a page
//! let load_state = use_get_consume_id(consume_id);
//! let info = use_spend_info().get();
//! ```

use dioxus::prelude::*;
use masoori_core::{ApiClient, ConsumeId, ConsumeInfo, LoadState, RequestTicket, SpendSlot};

/// Card API client from the launch settings, absent if launch skipped setup.
#[derive(Clone, Debug)]
pub struct ApiHandle(pub Option<ApiClient>);

/// The most recently loaded card info for this session.
///
/// Starts as the empty [`ConsumeInfo`], so readers can render before any
/// request resolves. Write rules live in [`SpendSlot`].
#[derive(Clone, Copy, PartialEq)]
pub struct SpendInfoState {
    slot: Signal<SpendSlot>,
}

impl SpendInfoState {
    /// Must be called inside a component scope (e.g. `use_context_provider`).
    pub fn new() -> Self {
        Self {
            slot: Signal::new(SpendSlot::default()),
        }
    }

    /// Current card info; subscribes the calling component to changes.
    pub fn get(&self) -> ConsumeInfo {
        self.slot.read().info().clone()
    }

    fn begin_request(&mut self) -> RequestTicket {
        self.slot.write().begin()
    }

    /// Store a result if its request is still the newest. Stale results are
    /// dropped without notifying readers.
    fn complete(&mut self, ticket: RequestTicket, info: ConsumeInfo) -> bool {
        if !self.slot.peek().is_current(ticket) {
            tracing::debug!("Dropping card info from a superseded request");
            return false;
        }
        self.slot.write().complete(ticket, info)
    }

    fn fail(&self, ticket: RequestTicket) -> bool {
        self.slot.peek().fail(ticket)
    }
}

/// Hook to read the shared card info slot.
pub fn use_spend_info() -> SpendInfoState {
    use_context::<SpendInfoState>()
}

/// Hook to access the API client from context.
pub fn use_api_client() -> ApiHandle {
    use_context::<ApiHandle>()
}

/// Load the card for `consume_id` into the shared slot.
///
/// Issues one request whenever the id changes and never retries. A failed
/// load is logged and reported through the returned state; the slot keeps
/// whatever it held before, which is the empty card on first load.
pub fn use_get_consume_id(consume_id: ReadOnlySignal<ConsumeId>) -> Signal<LoadState> {
    let api = use_api_client();
    let spend_info = use_spend_info();
    let mut load_state = use_signal(LoadState::default);

    use_effect(move || {
        let id = consume_id();
        let Some(client) = api.0.clone() else {
            tracing::error!("No API client configured; cannot load consume {}", id);
            load_state.set(LoadState::Failed("API client not configured".to_string()));
            return;
        };

        let mut spend_info = spend_info;
        let ticket = spend_info.begin_request();
        load_state.set(LoadState::Loading);
        tracing::info!("Loading card for consume {}", id);

        spawn(async move {
            match client.get_consume(id).await {
                Ok(info) => {
                    if spend_info.complete(ticket, info) {
                        load_state.set(LoadState::Loaded);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load card for consume {}: {}", id, e);
                    if spend_info.fail(ticket) {
                        load_state.set(LoadState::Failed(e.to_string()));
                    }
                }
            }
        });
    });

    load_state
}
