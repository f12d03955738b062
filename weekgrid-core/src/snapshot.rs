//! The materialized input snapshot: events plus signups.
//!
//! The data-acquisition side hands over plain JSON exports; this module
//! parses them into the typed model. Parsing is pure; reading the files is
//! the caller's concern.

use crate::error::{WeekGridError, WeekGridResult};
use crate::event::Event;
use crate::signup::Signups;

/// A point-in-time view of all events and signups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub signups: Signups,
}

impl Snapshot {
    /// Parse a snapshot from the two exported JSON documents: the event
    /// list (an array) and the signup map (an object keyed by event id).
    pub fn from_json(events_json: &str, signups_json: &str) -> WeekGridResult<Self> {
        let events: Vec<Event> = serde_json::from_str(events_json)
            .map_err(|e| WeekGridError::Serialization(format!("event list: {}", e)))?;
        let signups: Signups = serde_json::from_str(signups_json)
            .map_err(|e| WeekGridError::Serialization(format!("signup map: {}", e)))?;

        Ok(Self { events, signups })
    }
}
