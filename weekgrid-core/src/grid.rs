//! The week grid: its fixed shape, and the materialized render model.

use serde::{Deserialize, Serialize};

use crate::error::{WeekGridError, WeekGridResult};
use crate::layout::EventBlock;

/// The fixed shape of the week view: which days, which hours.
///
/// `end_hour` is exclusive; the last rendered row is `end_hour - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub days: Vec<String>,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            days: ["Onsdag", "Torsdag", "Fredag", "Lørdag"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            start_hour: 6,
            end_hour: 24,
        }
    }
}

impl GridSpec {
    /// Check the preconditions for building a grid at all.
    pub fn validate(&self) -> WeekGridResult<()> {
        if self.days.is_empty() {
            return Err(WeekGridError::Grid("day list is empty".to_string()));
        }
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(WeekGridError::Grid(format!(
                "invalid hour range {}..{}",
                self.start_hour, self.end_hour
            )));
        }
        Ok(())
    }

    /// The rendered hour rows, in order.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }

    /// Index of a weekday in the configured day list.
    pub fn day_index(&self, weekday: &str) -> Option<usize> {
        self.days.iter().position(|d| d == weekday)
    }
}

/// One `(day, hour)` cell with the event blocks laid out inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub day: String,
    pub hour: u32,
    pub blocks: Vec<EventBlock>,
}

/// One hour row: a time label plus one slot per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub hour: u32,
    pub label: String,
    pub slots: Vec<Slot>,
}

/// The fully materialized week view.
///
/// Rebuilt from scratch on every layout pass. Presentation adapters turn it
/// into terminal output, HTML, or anything else without re-deriving layout
/// math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    pub headers: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl GridModel {
    /// Build the empty grid skeleton: one header per day, one labeled row
    /// per hour with an empty slot cell per day. No event data involved.
    pub fn skeleton(spec: &GridSpec) -> WeekGridResult<Self> {
        spec.validate()?;

        let headers = spec.days.clone();
        let rows = spec
            .hours()
            .map(|hour| GridRow {
                hour,
                label: format!("{:02}:00", hour),
                slots: spec
                    .days
                    .iter()
                    .map(|day| Slot {
                        day: day.clone(),
                        hour,
                        blocks: Vec::new(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self { headers, rows })
    }

    /// Total number of slot cells, headers and time labels excluded.
    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(|row| row.slots.len()).sum()
    }

    pub fn slot_mut(&mut self, day_index: usize, hour: u32) -> Option<&mut Slot> {
        let row = self.rows.iter_mut().find(|row| row.hour == hour)?;
        row.slots.get_mut(day_index)
    }
}
