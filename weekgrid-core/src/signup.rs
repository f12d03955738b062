//! Signup records: who attends which event.
//!
//! The exported signup map is keyed by event id, then by signup user id.
//! Both levels are `BTreeMap`s, so the attendee set derived for an event
//! comes out in ascending user-id order no matter how the export was
//! ordered. That order is what the color rules mean by "first attendee".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single signup document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signup {
    #[serde(rename = "docId", default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,

    #[serde(rename = "userEmail")]
    pub user_email: String,
}

/// All signups, keyed by event id and then signup user id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signups(pub BTreeMap<String, BTreeMap<String, Signup>>);

impl Signups {
    /// Attendee emails for an event, in ascending user-id order.
    ///
    /// Events nobody signed up for yield an empty set, not an error.
    pub fn attendees_for(&self, event_id: &str) -> Vec<String> {
        self.0
            .get(event_id)
            .map(|by_user| by_user.values().map(|s| s.user_email.clone()).collect())
            .unwrap_or_default()
    }
}
