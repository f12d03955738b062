//! Layout engine and shared types for the weekgrid week calendar.
//!
//! This crate is the pure core: it takes a snapshot of events and signups
//! plus the team configuration and produces a fully materialized grid
//! model: headers, hour rows, and positioned, colored event blocks with
//! attendee pills. It holds no state between calls and performs no I/O
//! beyond loading the team config file; the CLI crate turns the model into
//! terminal or HTML output.

pub mod color;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod signup;
pub mod snapshot;
pub mod team;

pub use color::{resolve_event_color, ColorPair, ColorRule, ResolvedColor};
pub use error::{WeekGridError, WeekGridResult};
pub use event::Event;
pub use grid::{GridModel, GridRow, GridSpec, Slot};
pub use layout::{bucket_events, layout_week, AttendeePill, EventBlock, Geometry};
pub use signup::{Signup, Signups};
pub use snapshot::Snapshot;
pub use team::{EveryoneColor, TeamConfig, TeamMember};
