//! In-memory store holding the events most recently fetched from the API.

use std::collections::HashSet;

use crate::models::event::Event;

/// Authoritative collection of known events.
///
/// Contents are replaced wholesale on every successful fetch and shrink only
/// when the API confirms a delete. Order is whatever the caller supplied.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current contents and keep `events` in the given order.
    ///
    /// Later events repeating an id already seen are dropped.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        let mut seen = HashSet::with_capacity(events.len());
        let incoming = events.len();

        self.events = events
            .into_iter()
            .filter(|event| {
                let fresh = seen.insert(event.id.clone());
                if !fresh {
                    log::warn!("Dropping duplicate event id '{}' ({})", event.id, event.title);
                }
                fresh
            })
            .collect();

        log::debug!(
            "Event store replaced: {} received, {} kept",
            incoming,
            self.events.len()
        );
    }

    /// Remove the event with `id`, returning whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        self.events.len() != before
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
