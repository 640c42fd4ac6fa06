//! Bounded FIFO history of chat and system events.

use std::collections::VecDeque;

use super::{
    entity::ChatEvent,
    value_object::{EventId, HistoryLimit},
};

/// Shared history, oldest first, never longer than its limit.
#[derive(Debug)]
pub struct HistoryRing {
    events: VecDeque<ChatEvent>,
    limit: HistoryLimit,
}

impl HistoryRing {
    pub fn new(limit: HistoryLimit) -> Self {
        Self {
            events: VecDeque::with_capacity(limit.value()),
            limit,
        }
    }

    /// Append `event` at the tail, evicting the oldest entry when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn append(&mut self, event: ChatEvent) -> Option<ChatEvent> {
        self.events.push_back(event);
        if self.events.len() > self.limit.value() {
            self.events.pop_front()
        } else {
            None
        }
    }

    pub fn find(&self, id: &EventId) -> Option<&ChatEvent> {
        self.events.iter().find(|event| &event.id() == id)
    }

    pub fn remove_by_id(&mut self, id: &EventId) -> Option<ChatEvent> {
        let index = self.events.iter().position(|event| &event.id() == id)?;
        self.events.remove(index)
    }

    /// Copy of the history, oldest first.
    pub fn snapshot(&self) -> Vec<ChatEvent> {
        self.events.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn limit(&self) -> HistoryLimit {
        self.limit
    }
}
