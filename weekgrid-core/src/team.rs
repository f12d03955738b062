//! Team configuration: who is on the team, and which colors identify them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WeekGridError, WeekGridResult};

/// One configured team member.
///
/// A member's position in the config file fixes both the pill order on
/// every event and what "first" means when the color rules scan the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub email: String,
    pub name: String,
    /// Fill color token, passed through to the presentation layer as-is.
    pub color: String,
    pub border_color: String,
}

impl TeamMember {
    /// The initial shown in this member's attendee pill.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }
}

/// Color pair used when every configured member attends the same event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveryoneColor {
    pub color: String,
    pub border_color: String,
}

/// The full team configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    #[serde(default)]
    pub members: Vec<TeamMember>,
    pub everyone: EveryoneColor,
}

impl TeamConfig {
    /// Load the team configuration from a TOML file.
    pub fn load(path: &Path) -> WeekGridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WeekGridError::Config(e.to_string()))
    }

    /// Look up a member by email.
    pub fn member(&self, email: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.email == email)
    }

    /// Whether every configured member appears in the attendee set.
    ///
    /// An empty team never counts as fully attending.
    pub fn is_full_team(&self, attendees: &[String]) -> bool {
        !self.members.is_empty()
            && self
                .members
                .iter()
                .all(|m| attendees.iter().any(|email| email == &m.email))
    }
}
