//! Bookkeeping for the card loader.
//!
//! Every request takes a ticket from a [`RequestGeneration`]. Only the newest
//! ticket may write its result; anything older finished after it was
//! superseded and is dropped. [`SpendSlot`] pairs the counter with the card
//! info it guards.

use crate::types::ConsumeInfo;

/// Progress of the most recent card request as seen by a page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Request failed; the shared card keeps its previous value
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Issue a ticket, superseding all earlier ones.
    pub fn next(&mut self) -> RequestTicket {
        self.current += 1;
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }
}

/// The per-session card slot.
///
/// Holds the empty [`ConsumeInfo`] until a request completes. A completed
/// request replaces the info wholesale; a failed one leaves it alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpendSlot {
    info: ConsumeInfo,
    generation: RequestGeneration,
}

impl SpendSlot {
    pub fn info(&self) -> &ConsumeInfo {
        &self.info
    }

    /// Start a request, superseding any still in flight.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation.next()
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Store `info` if `ticket` is still the newest request. Returns whether it was stored.
    pub fn complete(&mut self, ticket: RequestTicket, info: ConsumeInfo) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping card info from a superseded request");
            return false;
        }
        self.info = info;
        true
    }

    /// Record a failed request. The info is untouched; returns whether the
    /// failure belongs to the newest request and should be reported.
    pub fn fail(&self, ticket: RequestTicket) -> bool {
        self.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BasicItem, Card};

    fn card(name: &str) -> ConsumeInfo {
        ConsumeInfo {
            card: Card {
                name: name.to_string(),
                ..Card::default()
            },
            basic_list: vec![BasicItem {
                id: 1,
                keyword: "coffee".to_string(),
            }],
        }
    }

    #[test]
    fn newest_ticket_wins() {
        let mut gen = RequestGeneration::default();
        let first = gen.next();
        assert!(gen.is_current(first));

        let second = gen.next();
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));
    }

    #[test]
    fn load_state_default() {
        assert_eq!(LoadState::default(), LoadState::Idle);
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Failed("boom".into()).is_loading());
    }

    #[test]
    fn slot_starts_empty() {
        let slot = SpendSlot::default();
        assert_eq!(slot.info(), &ConsumeInfo::default());
    }

    #[test]
    fn completed_request_replaces_info() {
        let mut slot = SpendSlot::default();
        let ticket = slot.begin();
        assert!(slot.complete(ticket, card("The Fool")));
        assert_eq!(slot.info().card.name, "The Fool");

        let ticket = slot.begin();
        let mut star = card("The Star");
        star.basic_list.clear();
        assert!(slot.complete(ticket, star.clone()));
        assert_eq!(slot.info(), &star);
    }

    #[test]
    fn failure_keeps_default() {
        let mut slot = SpendSlot::default();
        let ticket = slot.begin();
        assert!(slot.fail(ticket));
        assert_eq!(slot.info(), &ConsumeInfo::default());
    }

    #[test]
    fn failure_keeps_previous_card() {
        let mut slot = SpendSlot::default();
        let ticket = slot.begin();
        slot.complete(ticket, card("The Fool"));

        let ticket = slot.begin();
        assert!(slot.fail(ticket));
        assert_eq!(slot.info().card.name, "The Fool");
    }

    #[test]
    fn stale_complete_is_ignored() {
        let mut slot = SpendSlot::default();
        let old = slot.begin();
        let new = slot.begin();

        assert!(!slot.complete(old, card("The Tower")));
        assert_eq!(slot.info(), &ConsumeInfo::default());

        assert!(slot.complete(new, card("The Sun")));
        assert!(!slot.complete(old, card("The Tower")));
        assert_eq!(slot.info().card.name, "The Sun");
    }

    #[test]
    fn stale_failure_is_not_reported() {
        let mut slot = SpendSlot::default();
        let old = slot.begin();
        let _new = slot.begin();
        assert!(!slot.fail(old));
    }
}
