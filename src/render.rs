//! Terminal rendering for the grid model.
//!
//! Extension traits that turn weekgrid-core types into colored terminal
//! output using owo_colors. All layout math lives in the core crate; this
//! adapter only formats what the model already says.

use owo_colors::OwoColorize;
use weekgrid_core::{ColorRule, EventBlock, GridModel, Slot};

/// Extension trait for terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the rule that picked the event's color.
fn colorize_rule(rule: &ColorRule, text: &str) -> String {
    match rule {
        ColorRule::Everyone => text.green().to_string(),
        ColorRule::Member(_) => text.yellow().to_string(),
        ColorRule::UnmatchedAttendees => text.red().to_string(),
        ColorRule::NoAttendees => text.dimmed().to_string(),
    }
}

impl Render for EventBlock {
    fn render(&self) -> String {
        let title = colorize_rule(&self.color.rule, &self.title);

        let location = if self.location.is_empty() {
            String::new()
        } else {
            format!("  {}", self.location.dimmed())
        };

        let pills = if self.pills.is_empty() {
            String::new()
        } else {
            let initials: Vec<&str> = self.pills.iter().map(|p| p.initial.as_str()).collect();
            format!("  [{}]", initials.join(""))
        };

        format!("{}{}{}", title, location, pills)
    }
}

impl Render for Slot {
    fn render(&self) -> String {
        self.blocks
            .iter()
            .map(|block| {
                // The model stores the minute as a percent offset into the
                // hour; recover it for the time label.
                let minute = (block.geometry.top_pct * 60.0 / 100.0).round() as u32;
                let time = format!("{:02}:{:02}", self.hour, minute);
                format!("  {}  {}", time.dimmed(), block.render())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a single day's column as a header plus one line per event.
pub fn render_day(grid: &GridModel, day_index: usize) -> String {
    let mut lines = Vec::new();

    if let Some(day) = grid.headers.get(day_index) {
        lines.push(day.bold().to_string());
    }

    let mut any = false;
    for row in &grid.rows {
        if let Some(slot) = row.slots.get(day_index) {
            if !slot.blocks.is_empty() {
                lines.push(slot.render());
                any = true;
            }
        }
    }

    if !any {
        lines.push(format!("  {}", "No events".dimmed()));
    }

    lines.join("\n")
}

impl Render for GridModel {
    fn render(&self) -> String {
        (0..self.headers.len())
            .map(|day_index| render_day(self, day_index))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
