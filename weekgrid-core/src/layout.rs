//! Slot bucketing and overlap resolution.
//!
//! This is the whole engine: events are grouped by their `(day, start hour)`
//! slot, every bucket is sorted and sliced horizontally so co-located events
//! never overlap, and each block gets its color and attendee pills. One
//! synchronous pass, recomputed in full from the given snapshot; nothing is
//! cached between calls.

use std::collections::BTreeMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::color::{resolve_event_color, ResolvedColor};
use crate::error::WeekGridResult;
use crate::event::Event;
use crate::grid::{GridModel, GridSpec};
use crate::signup::Signups;
use crate::team::TeamConfig;

/// Pixels shaved off every block's width so neighbours never touch.
const WIDTH_GUTTER_PX: f64 = 2.0;
/// Pixels each successive block is nudged right, on top of its percent offset.
const LEFT_NUDGE_PX: f64 = 1.0;
/// Fixed block height as a percentage of the hour cell. Duration is not
/// consulted; every block renders just short of one hour tall.
const BLOCK_HEIGHT_PCT: f64 = 95.0;

/// Placement of a block within its slot cell, expressed as a percentage
/// plus a pixel adjustment so a CSS adapter can emit `calc(pct% - px)`
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width_pct: f64,
    pub width_gutter_px: f64,
    pub left_pct: f64,
    pub left_nudge_px: f64,
    pub top_pct: f64,
    pub height_pct: f64,
}

/// One attendee indicator on an event block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeePill {
    pub initial: String,
    pub name: String,
    pub color: String,
}

/// A positioned, colored event, ready for a presentation adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBlock {
    pub id: String,
    pub title: String,
    pub location: String,
    pub geometry: Geometry,
    pub color: ResolvedColor,
    pub pills: Vec<AttendeePill>,
}

/// Lay out a week of events against a grid spec.
///
/// Builds the skeleton, buckets the events, resolves overlaps and colors,
/// and returns the materialized grid model. Malformed events are skipped
/// silently; an unusable spec is the only error.
pub fn layout_week(
    events: &[Event],
    signups: &Signups,
    team: &TeamConfig,
    spec: &GridSpec,
) -> WeekGridResult<GridModel> {
    let mut grid = GridModel::skeleton(spec)?;

    for ((day_index, hour), bucket) in bucket_events(events, spec) {
        let blocks = resolve_overlaps(&bucket, signups, team);
        if let Some(slot) = grid.slot_mut(day_index, hour) {
            slot.blocks = blocks;
        }
    }

    Ok(grid)
}

/// Group renderable events by their `(day index, start hour)` slot.
///
/// Events are skipped, silently, when their weekday is not part of the
/// grid, their time range is missing or malformed, or their start hour has
/// no row. Bucketing is strictly by start hour; an event never lands in
/// more than one cell. First-seen order within a bucket is preserved; the
/// overlap resolver does the deterministic sort.
pub fn bucket_events<'a>(
    events: &'a [Event],
    spec: &GridSpec,
) -> BTreeMap<(usize, u32), Vec<&'a Event>> {
    let mut buckets: BTreeMap<(usize, u32), Vec<&Event>> = BTreeMap::new();

    for event in events {
        let Some(day_index) = spec.day_index(&event.weekday) else {
            continue;
        };
        let Some(start) = event.start_time() else {
            continue;
        };
        let hour = start.hour();
        if !spec.hours().contains(&hour) {
            continue;
        }
        buckets.entry((day_index, hour)).or_default().push(event);
    }

    buckets
}

/// Turn one bucket of co-located events into positioned blocks.
///
/// The bucket is sorted by title so left-to-right order is stable across
/// renders regardless of input order. Each of the `n` events then gets a
/// `100/n`% slice minus the gutter, offset by its sorted index; the top
/// offset tracks the start minute within the hour. A lone event fills the
/// whole cell.
fn resolve_overlaps(bucket: &[&Event], signups: &Signups, team: &TeamConfig) -> Vec<EventBlock> {
    let mut ordered: Vec<&Event> = bucket.to_vec();
    ordered.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });

    let slice_pct = 100.0 / ordered.len() as f64;

    ordered
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let start_minute = event.start_time().map(|t| t.minute()).unwrap_or(0);
            let attendees = signups.attendees_for(&event.id);

            EventBlock {
                id: event.id.clone(),
                title: event.title.clone(),
                location: event.location.clone(),
                geometry: Geometry {
                    width_pct: slice_pct,
                    width_gutter_px: WIDTH_GUTTER_PX,
                    left_pct: slice_pct * index as f64,
                    left_nudge_px: LEFT_NUDGE_PX * index as f64,
                    top_pct: (start_minute as f64 / 60.0) * 100.0,
                    height_pct: BLOCK_HEIGHT_PCT,
                },
                color: resolve_event_color(&attendees, team),
                pills: attendee_pills(&attendees, team),
            }
        })
        .collect()
}

/// One pill per configured member who attends, in team config order.
///
/// Iterating the team rather than the attendee set keeps the pill row
/// positionally stable: a member always appears in the same place on every
/// event. Absent members emit nothing.
fn attendee_pills(attendees: &[String], team: &TeamConfig) -> Vec<AttendeePill> {
    team.members
        .iter()
        .filter(|member| attendees.iter().any(|email| email == &member.email))
        .map(|member| AttendeePill {
            initial: member.initial(),
            name: member.name.clone(),
            color: member.color.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorRule;
    use crate::signup::Signup;
    use crate::team::{EveryoneColor, TeamMember};

    fn event(id: &str, title: &str, weekday: &str, time_range: Option<&str>) -> Event {
        Event {
            id: id.to_string(),
            weekday: weekday.to_string(),
            time_range: time_range.map(|t| t.to_string()),
            title: title.to_string(),
            location: "Hal B".to_string(),
            description: None,
        }
    }

    fn member(email: &str, name: &str, color: &str) -> TeamMember {
        TeamMember {
            email: email.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            border_color: format!("border-{}", color),
        }
    }

    fn team() -> TeamConfig {
        TeamConfig {
            members: vec![
                member("anna@example.com", "Anna", "bg-rose-300"),
                member("bo@example.com", "Bo", "bg-sky-300"),
                member("carla@example.com", "Carla", "bg-lime-300"),
            ],
            everyone: EveryoneColor {
                color: "bg-purple-300".to_string(),
                border_color: "border-purple-500".to_string(),
            },
        }
    }

    fn signups_for(event_id: &str, emails: &[&str]) -> Signups {
        let mut by_user = BTreeMap::new();
        for (i, email) in emails.iter().enumerate() {
            by_user.insert(
                format!("user-{}", i),
                Signup {
                    doc_id: None,
                    user_email: email.to_string(),
                },
            );
        }
        let mut map = BTreeMap::new();
        map.insert(event_id.to_string(), by_user);
        Signups(map)
    }

    #[test]
    fn test_malformed_events_never_reach_a_bucket() {
        let events = vec![
            event("e1", "Ukendt dag", "Mandag", Some("10:00")),
            event("e2", "Ingen tid", "Torsdag", None),
            event("e3", "Skæv tid", "Torsdag", Some("kl. ti")),
            event("e4", "For tidlig", "Torsdag", Some("05:00")),
        ];

        let buckets = bucket_events(&events, &GridSpec::default());
        assert!(
            buckets.is_empty(),
            "Unrenderable events should be skipped, got {:?}",
            buckets.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_bucketing_is_by_start_hour_only() {
        // Nominally two hours long, but it still lands in the 10 o'clock
        // cell and nowhere else.
        let events = vec![event("e1", "Lang tur", "Torsdag", Some("10:15 - 12:15"))];

        let buckets = bucket_events(&events, &GridSpec::default());
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains_key(&(1, 10)));
    }

    #[test]
    fn test_overlapping_events_split_the_cell_by_title_order() {
        let events = vec![
            event("zeta", "Zeta", "Torsdag", Some("10:00 - 11:00")),
            event("alpha", "Alpha", "Torsdag", Some("10:00 - 11:00")),
        ];

        let grid = layout_week(&events, &Signups::default(), &team(), &GridSpec::default())
            .expect("Should lay out");

        let slot = &grid.rows[4].slots[1]; // Torsdag, 10:00
        assert_eq!(slot.hour, 10);
        assert_eq!(slot.blocks.len(), 2);

        let alpha = &slot.blocks[0];
        assert_eq!(alpha.title, "Alpha", "Title sort should put Alpha first");
        assert_eq!(alpha.geometry.width_pct, 50.0);
        assert_eq!(alpha.geometry.left_pct, 0.0);
        assert_eq!(alpha.geometry.left_nudge_px, 0.0);

        let zeta = &slot.blocks[1];
        assert_eq!(zeta.title, "Zeta");
        assert_eq!(zeta.geometry.width_pct, 50.0);
        assert_eq!(zeta.geometry.left_pct, 50.0);
        assert_eq!(zeta.geometry.left_nudge_px, 1.0);
    }

    #[test]
    fn test_lone_event_fills_the_cell() {
        let events = vec![event("e1", "Alene", "Onsdag", Some("09:00"))];

        let grid = layout_week(&events, &Signups::default(), &team(), &GridSpec::default())
            .expect("Should lay out");

        let block = &grid.rows[3].slots[0].blocks[0];
        assert_eq!(block.geometry.width_pct, 100.0);
        assert_eq!(block.geometry.left_pct, 0.0);
        assert_eq!(block.geometry.height_pct, 95.0);
    }

    #[test]
    fn test_slice_widths_cover_the_cell() {
        let events = vec![
            event("a", "A", "Fredag", Some("12:00")),
            event("b", "B", "Fredag", Some("12:00")),
            event("c", "C", "Fredag", Some("12:00")),
        ];

        let grid = layout_week(&events, &Signups::default(), &team(), &GridSpec::default())
            .expect("Should lay out");

        let blocks = &grid.rows[6].slots[2].blocks;
        let total: f64 = blocks.iter().map(|b| b.geometry.width_pct).sum();
        assert!(
            (total - 100.0).abs() < 1e-9,
            "Slice widths should sum to 100%, got {}",
            total
        );
        for (i, block) in blocks.iter().enumerate() {
            assert!(
                (block.geometry.left_pct - i as f64 * 100.0 / 3.0).abs() < 1e-9,
                "Offsets should be contiguous slices"
            );
        }
    }

    #[test]
    fn test_top_offset_tracks_start_minute() {
        let events = vec![event("e1", "Halv", "Torsdag", Some("10:30 - 11:00"))];

        let grid = layout_week(&events, &Signups::default(), &team(), &GridSpec::default())
            .expect("Should lay out");

        let block = &grid.rows[4].slots[1].blocks[0];
        assert_eq!(block.geometry.top_pct, 50.0);
    }

    #[test]
    fn test_full_team_event_gets_everyone_color() {
        let events = vec![event("e1", "Fælles", "Torsdag", Some("10:00"))];
        let signups = signups_for(
            "e1",
            &["anna@example.com", "bo@example.com", "carla@example.com"],
        );

        let grid =
            layout_week(&events, &signups, &team(), &GridSpec::default()).expect("Should lay out");

        let block = &grid.rows[4].slots[1].blocks[0];
        assert_eq!(block.color.rule, ColorRule::Everyone);
        assert_eq!(block.color.pair.fill, "bg-purple-300");
        assert_eq!(block.pills.len(), 3);
    }

    #[test]
    fn test_partial_attendance_uses_first_attendee_color() {
        let events = vec![
            event("zeta", "Zeta", "Torsdag", Some("10:00")),
            event("alpha", "Alpha", "Torsdag", Some("10:00")),
        ];
        // user-0 -> anna, user-1 -> bo: attendee order is fixed by user id.
        let signups = signups_for("alpha", &["anna@example.com", "bo@example.com"]);

        let grid =
            layout_week(&events, &signups, &team(), &GridSpec::default()).expect("Should lay out");

        let alpha = &grid.rows[4].slots[1].blocks[0];
        assert_eq!(alpha.title, "Alpha");
        assert_eq!(
            alpha.color.rule,
            ColorRule::Member("anna@example.com".to_string()),
            "First attendee in user-id order decides the color"
        );
        assert_eq!(alpha.color.pair.fill, "bg-rose-300");

        let zeta = &grid.rows[4].slots[1].blocks[1];
        assert_eq!(
            zeta.color.rule,
            ColorRule::NoAttendees,
            "Colors are resolved per event, not shared across the bucket"
        );
    }

    #[test]
    fn test_unscheduled_event_has_neutral_color_and_no_pills() {
        let events = vec![event("e1", "Tom", "Onsdag", Some("08:00"))];

        let grid = layout_week(&events, &Signups::default(), &team(), &GridSpec::default())
            .expect("Should lay out");

        let block = &grid.rows[2].slots[0].blocks[0];
        assert_eq!(block.color.rule, ColorRule::NoAttendees);
        assert!(block.pills.is_empty());
    }

    #[test]
    fn test_pills_follow_team_order_not_signup_order() {
        let events = vec![event("e1", "Møde", "Torsdag", Some("10:00"))];
        // user-0 -> carla, user-1 -> anna: signup order deliberately
        // reversed relative to the team config.
        let signups = signups_for("e1", &["carla@example.com", "anna@example.com"]);

        let grid =
            layout_week(&events, &signups, &team(), &GridSpec::default()).expect("Should lay out");

        let pills = &grid.rows[4].slots[1].blocks[0].pills;
        let names: Vec<&str> = pills.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Carla"]);
        assert_eq!(pills[0].initial, "A");
    }

    #[test]
    fn test_layout_is_deterministic() {
        let events = vec![
            event("zeta", "Zeta", "Torsdag", Some("10:00")),
            event("alpha", "Alpha", "Torsdag", Some("10:00")),
            event("e3", "Gym", "Fredag", Some("14:30 - 16:00")),
        ];
        let signups = signups_for("alpha", &["anna@example.com", "guest@example.com"]);
        let spec = GridSpec::default();

        let first = layout_week(&events, &signups, &team(), &spec).expect("Should lay out");
        let second = layout_week(&events, &signups, &team(), &spec).expect("Should lay out");
        assert_eq!(first, second, "Identical inputs must produce identical models");
    }

    #[test]
    fn test_grid_shape_is_independent_of_events() {
        let spec = GridSpec::default();
        let empty = layout_week(&[], &Signups::default(), &team(), &spec).expect("Should lay out");

        let events = vec![event("e1", "Noget", "Torsdag", Some("10:00"))];
        let busy =
            layout_week(&events, &Signups::default(), &team(), &spec).expect("Should lay out");

        assert_eq!(empty.slot_count(), busy.slot_count());
        assert_eq!(empty.headers, busy.headers);
    }
}
