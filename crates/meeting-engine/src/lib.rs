//! # meeting-engine
//!
//! Finds every time slot within a single day where a meeting can be held,
//! given the day's existing calendar events and a request naming mandatory
//! attendees, optional attendees and a duration.
//!
//! Time is measured in whole minutes since midnight, `0..=1439`. A slot never
//! conflicts with a mandatory attendee's events. When no slot suits everybody,
//! the engine returns the slots that exclude the fewest optional attendees.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(TimeRange::new(600, 660).unwrap(), ["alice"])];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(slots, vec![TimeRange::new(0, 600).unwrap(), TimeRange::new(660, 1440).unwrap()]);
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute ranges within one day
//! - [`event`] — Calendar events and meeting requests
//! - [`sweep`] — Free windows for a set of attendees
//! - [`split`] — Carve a free window around one attendee's events
//! - [`optimizer`] — Pick the windows that exclude the fewest optional attendees
//! - [`query`] — Top-level entry point
//! - [`options`] — Policy knobs for the ambiguous corners of the algorithm
//! - [`wire`] — JSON schedule documents shared by the CLI and bindings
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod optimizer;
pub mod options;
pub mod query;
pub mod split;
pub mod sweep;
pub mod time_range;
pub mod wire;

pub use error::EngineError;
pub use event::{Event, MeetingRequest};
pub use options::{ConflictCounting, QueryOptions, TrailingWindow};
pub use query::{find_meeting_times, MeetingQuery};
pub use time_range::TimeRange;
pub use wire::{parse_schedule, ranges_to_json, Schedule};
