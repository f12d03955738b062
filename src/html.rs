//! HTML rendering for the grid model.
//!
//! Produces a standalone page whose markup mirrors the model one to one:
//! a header row, a time-label column, one cell per day and hour, and
//! absolutely positioned event blocks inside the cells. Color tokens from
//! the team config are emitted as class names, untouched; the computed
//! geometry becomes inline `calc()` styles.

use weekgrid_core::{EventBlock, GridModel};

const STYLE: &str = r#"
  body { font-family: system-ui, sans-serif; margin: 1rem; }
  .calendar-grid { display: grid; gap: 1px; background: #e5e7eb; }
  .calendar-header { background: #f9fafb; font-weight: 600; text-align: center; padding: 0.5rem 0; }
  .time-label { background: #f9fafb; font-size: 0.75rem; color: #6b7280; text-align: right; padding: 0.25rem 0.5rem 0 0; }
  .calendar-timeslot { background: #fff; position: relative; min-height: 3.5rem; }
  .calendar-event { position: absolute; border-left-width: 3px; border-left-style: solid; border-radius: 0.25rem; font-size: 0.7rem; overflow: hidden; }
  .calendar-event-inner { padding: 0.15rem 0.25rem; }
  .event-title { display: block; font-weight: 600; }
  .event-location { display: block; }
  .event-attendees { display: flex; gap: 2px; margin-top: 2px; }
  .attendee-pill { width: 1rem; height: 1rem; border-radius: 9999px; font-size: 0.6rem; line-height: 1rem; text-align: center; }
"#;

/// Render the whole grid as a standalone HTML page.
pub fn render_page(grid: &GridModel, title: &str) -> String {
    let mut cells = String::new();

    // Top-left empty corner, then one header per day.
    cells.push_str("<div class=\"time-label\"></div>");
    for day in &grid.headers {
        cells.push_str(&format!(
            "<div class=\"calendar-header\">{}</div>",
            escape(day)
        ));
    }

    for row in &grid.rows {
        cells.push_str(&format!("<div class=\"time-label\">{}</div>", row.label));
        for slot in &row.slots {
            cells.push_str(&format!(
                "<div class=\"calendar-timeslot\" data-day=\"{}\" data-hour=\"{}\">",
                escape(&slot.day),
                slot.hour
            ));
            for block in &slot.blocks {
                cells.push_str(&render_block(block));
            }
            cells.push_str("</div>");
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"calendar-grid\" style=\"grid-template-columns: 60px repeat({days}, 1fr)\">{cells}</div>\n\
         </body>\n</html>\n",
        title = escape(title),
        days = grid.headers.len(),
        cells = cells
    )
}

fn render_block(block: &EventBlock) -> String {
    let g = &block.geometry;
    let style = format!(
        "width: calc({}% - {}px); left: calc({}% + {}px); top: {}%; height: {}%;",
        g.width_pct, g.width_gutter_px, g.left_pct, g.left_nudge_px, g.top_pct, g.height_pct
    );

    let pills: String = block
        .pills
        .iter()
        .map(|pill| {
            format!(
                "<div class=\"attendee-pill {}\" title=\"{}\">{}</div>",
                escape(&pill.color),
                escape(&pill.name),
                escape(&pill.initial)
            )
        })
        .collect();

    format!(
        "<div class=\"calendar-event {} {}\" style=\"{}\">\
         <div class=\"calendar-event-inner\">\
         <span class=\"event-title\">{}</span>\
         <span class=\"event-location\">{}</span>\
         <div class=\"event-attendees\">{}</div>\
         </div></div>",
        escape(&block.color.pair.fill),
        escape(&block.color.pair.border),
        style,
        escape(&block.title),
        escape(&block.location),
        pills
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
