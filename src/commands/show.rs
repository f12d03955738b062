use anyhow::Result;
use weekgrid_core::layout_week;

use crate::inputs::{self, InputArgs};
use crate::render::{render_day, Render};

pub fn run(args: &InputArgs, day: Option<&str>, json: bool) -> Result<()> {
    let inputs = inputs::load(args)?;

    let day_index = match day {
        Some(name) => match inputs.spec.day_index(name) {
            Some(index) => Some(index),
            None => {
                anyhow::bail!(
                    "Day '{}' is not part of the configured week. Available: {}",
                    name,
                    inputs.spec.days.join(", ")
                );
            }
        },
        None => None,
    };

    let grid = layout_week(
        &inputs.snapshot.events,
        &inputs.snapshot.signups,
        &inputs.team,
        &inputs.spec,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    match day_index {
        Some(index) => println!("{}", render_day(&grid, index)),
        None => println!("{}", grid.render()),
    }

    Ok(())
}
