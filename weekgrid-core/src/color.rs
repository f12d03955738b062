//! Event color resolution.
//!
//! An explicit cascade of named rules, evaluated independently per event:
//! the everyone-color when the whole team attends, otherwise the first
//! configured attendee's colors, otherwise one of two neutral fallbacks.
//! The result is tagged with the rule that produced it, so the priority
//! order stays auditable.

use serde::{Deserialize, Serialize};

use crate::team::TeamConfig;

/// A fill/border token pair. Tokens are opaque to the engine; the
/// presentation layer decides what they mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fill: String,
    pub border: String,
}

impl ColorPair {
    pub fn new(fill: &str, border: &str) -> Self {
        Self {
            fill: fill.to_string(),
            border: border.to_string(),
        }
    }

    /// Fallback for events whose attendees are all unconfigured.
    pub fn unmatched() -> Self {
        Self::new("bg-gray-400", "border-gray-600")
    }

    /// Pair for events nobody has signed up for.
    pub fn unscheduled() -> Self {
        Self::new(
            "bg-gray-200 dark:bg-gray-600",
            "border-gray-400 dark:border-gray-500",
        )
    }
}

/// Which cascade rule produced an event's color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorRule {
    /// Every configured member attends.
    Everyone,
    /// The first attendee that is a configured member (by email).
    Member(String),
    /// Attendees exist, but none of them are configured members.
    UnmatchedAttendees,
    /// No attendees at all.
    NoAttendees,
}

/// A resolved event color, tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColor {
    pub pair: ColorPair,
    pub rule: ColorRule,
}

/// Resolve the display color for one event from its attendee set.
///
/// The attendee slice must already be in attendee-set order; the second
/// rule picks the first entry that is a configured member.
pub fn resolve_event_color(attendees: &[String], team: &TeamConfig) -> ResolvedColor {
    if team.is_full_team(attendees) {
        return ResolvedColor {
            pair: ColorPair::new(&team.everyone.color, &team.everyone.border_color),
            rule: ColorRule::Everyone,
        };
    }

    if !attendees.is_empty() {
        if let Some(member) = attendees.iter().find_map(|email| team.member(email)) {
            return ResolvedColor {
                pair: ColorPair::new(&member.color, &member.border_color),
                rule: ColorRule::Member(member.email.clone()),
            };
        }
        return ResolvedColor {
            pair: ColorPair::unmatched(),
            rule: ColorRule::UnmatchedAttendees,
        };
    }

    ResolvedColor {
        pair: ColorPair::unscheduled(),
        rule: ColorRule::NoAttendees,
    }
}
