//! ComponentEvent - Describing Component Events for the Event Panel

use gpui::{App, Entity};

use crate::state::event_log_state::EventLogState;

/// An event emitted by a pricing component
pub trait ComponentEvent {
    /// Kebab-case name of the emitting component
    const SOURCE: &'static str;

    /// Kebab-case event name
    fn name(&self) -> &'static str;

    /// Short human readable payload
    fn payload(&self) -> String;
}

/// Append an event to the event log
pub fn record_event<E: ComponentEvent>(log: &Entity<EventLogState>, event: &E, cx: &mut App) {
    tracing::debug!(source = E::SOURCE, event = event.name(), "Component event");
    log.update(cx, |log, cx| {
        log.push_now(E::SOURCE, event.name(), event.payload());
        cx.notify();
    });
}
