use std::path::Path;

use anyhow::{Context, Result};
use weekgrid_core::layout_week;

use crate::html;
use crate::inputs::{self, InputArgs};

pub fn run(args: &InputArgs, out: &Path) -> Result<()> {
    let inputs = inputs::load(args)?;

    let grid = layout_week(
        &inputs.snapshot.events,
        &inputs.snapshot.signups,
        &inputs.team,
        &inputs.spec,
    )?;

    let block_count: usize = grid
        .rows
        .iter()
        .flat_map(|row| &row.slots)
        .map(|slot| slot.blocks.len())
        .sum();

    let page = html::render_page(&grid, "Ugekalender");
    std::fs::write(out, page).with_context(|| format!("Failed to write {}", out.display()))?;

    println!("Wrote {} ({} events)", out.display(), block_count);

    Ok(())
}
