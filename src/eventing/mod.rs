//! Eventing - Component Events
//!
//! Components report user actions as typed events through GPUI's
//! `EventEmitter`. This module describes them for logging.

mod component_event;

pub use component_event::*;
