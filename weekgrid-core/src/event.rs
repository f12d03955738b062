//! Event records as exported from the shared document store.
//!
//! Field names mirror the exported documents (`Weekday`, `TimeRange`, ...)
//! so a JSON snapshot deserializes directly into these types. Layout only
//! reads the identity, title, location, weekday and the `HH:MM` prefix of
//! the time range; free-text fields are carried through untouched.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A scheduled event (one document in the exported event list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,

    #[serde(rename = "Weekday")]
    pub weekday: String,

    /// Time range as entered, e.g. "10:00 - 11:30". Only the `HH:MM`
    /// prefix matters for layout; a missing or malformed value drops the
    /// event from rendering without failing the pass.
    #[serde(rename = "TimeRange", default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,

    #[serde(rename = "EventTitle")]
    pub title: String,

    #[serde(rename = "Location", default)]
    pub location: String,

    /// Free-text notes; not used by layout.
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// The start time parsed from the `HH:MM` prefix of the time range.
    ///
    /// `None` when the field is absent or the first five characters are not
    /// a valid two-digit hour and minute. Such events have no slot and are
    /// skipped by the bucketer.
    pub fn start_time(&self) -> Option<NaiveTime> {
        let range = self.time_range.as_deref()?;
        let prefix = range.get(..5)?;
        NaiveTime::parse_from_str(prefix, "%H:%M").ok()
    }
}
