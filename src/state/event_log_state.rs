//! EventLogState - Component Events with Ring Buffer
//!
//! Every event emitted by the component shown in the catalog is recorded here
//! so the event panel can display it.

use chrono::{DateTime, Local};

use crate::constants::EVENT_LOG_CAPACITY;
use crate::helpers::BoundedDeque;

/// A single recorded event
#[derive(Debug, Clone)]
pub struct EventEntry {
    pub id: u64,
    /// Emitting component ("pricing-table", "input-text"...)
    pub source: &'static str,
    /// Event name ("add-item", "input"...)
    pub name: &'static str,
    /// Human readable payload
    pub payload: String,
    pub timestamp: DateTime<Local>,
}

/// State for the event panel
#[derive(Debug)]
pub struct EventLogState {
    entries: BoundedDeque<EventEntry>,
    next_id: u64,
    /// Whether the panel is collapsed
    pub collapsed: bool,
}

impl EventLogState {
    /// Create a new event log with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
            collapsed: false,
        }
    }

    /// Record an event
    pub fn push(
        &mut self,
        source: &'static str,
        name: &'static str,
        payload: impl Into<String>,
        timestamp: DateTime<Local>,
    ) {
        let entry = EventEntry {
            id: self.next_id,
            source,
            name,
            payload: payload.into(),
            timestamp,
        };
        self.next_id += 1;
        if let Some(evicted) = self.entries.push(entry) {
            tracing::trace!(id = evicted.id, "Event log full, dropped oldest entry");
        }
    }

    /// Record an event with current timestamp
    pub fn push_now(&mut self, source: &'static str, name: &'static str, payload: impl Into<String>) {
        self.push(source, name, payload, Local::now());
    }

    /// Entries, newest first
    pub fn newest_first(&self) -> impl Iterator<Item = &EventEntry> {
        self.entries.iter_rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

impl Default for EventLogState {
    fn default() -> Self {
        Self::new(EVENT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut log = EventLogState::new(10);
        log.push_now("pricing-table", "add-item", "XS");
        log.push_now("pricing-table", "add-item", "S");

        let ids: Vec<u64> = log.newest_first().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = EventLogState::new(2);
        log.push_now("input-text", "input", "a");
        log.push_now("input-text", "input", "ab");
        log.push_now("input-text", "input", "abc");

        assert_eq!(log.len(), 2);
        let payloads: Vec<&str> = log.newest_first().map(|e| e.payload.as_str()).collect();
        assert_eq!(payloads, vec!["abc", "ab"]);
    }

    #[test]
    fn test_clear_keeps_numbering() {
        let mut log = EventLogState::new(10);
        log.push_now("pricing-header", "change-currency", "USD");
        log.clear();
        assert!(log.is_empty());

        log.push_now("pricing-header", "change-currency", "GBP");
        assert_eq!(log.newest_first().next().map(|e| e.id), Some(2));
    }
}
