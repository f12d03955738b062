use anyhow::Result;
use chrono::Timelike;
use owo_colors::OwoColorize;
use weekgrid_core::{bucket_events, resolve_event_color, ColorRule};

use crate::inputs::{self, InputArgs};

/// Flat listing of renderable events grouped by day, with each event's
/// resolved color rule and attendee count. Events the grid would skip are
/// reported as a count, not an error.
pub fn run(args: &InputArgs) -> Result<()> {
    let inputs = inputs::load(args)?;
    inputs.spec.validate()?;

    let buckets = bucket_events(&inputs.snapshot.events, &inputs.spec);

    if buckets.is_empty() {
        println!("{}", "No events found".dimmed());
    }

    let mut current_day: Option<usize> = None;
    let mut rendered = 0;

    for ((day_index, _hour), bucket) in &buckets {
        if current_day != Some(*day_index) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", inputs.spec.days[*day_index].bold());
            current_day = Some(*day_index);
        }

        for event in bucket {
            rendered += 1;

            let time = event
                .start_time()
                .map(|t| format!("{:02}:{:02}", t.hour(), t.minute()))
                .unwrap_or_default();

            let attendees = inputs.snapshot.signups.attendees_for(&event.id);
            let resolved = resolve_event_color(&attendees, &inputs.team);
            let rule_tag = match &resolved.rule {
                ColorRule::Everyone => "everyone".green().to_string(),
                ColorRule::Member(email) => email.yellow().to_string(),
                ColorRule::UnmatchedAttendees => "unconfigured".red().to_string(),
                ColorRule::NoAttendees => "unscheduled".dimmed().to_string(),
            };

            let count_tag = format!("[{} attending]", attendees.len());
            println!(
                "  {}  {} {} {}",
                time.dimmed(),
                event.title,
                count_tag.dimmed(),
                rule_tag
            );
        }
    }

    let skipped = inputs.snapshot.events.len() - rendered;
    if skipped > 0 {
        println!();
        println!(
            "{}",
            format!("({} events not renderable)", skipped).dimmed()
        );
    }

    Ok(())
}
