//! JSON schedule documents.
//!
//! The CLI and the language bindings all accept the same document:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "start": "09:00", "end": "09:30", "attendees": ["alice", "bob"]}
//!   ],
//!   "request": {"mandatory": ["alice"], "optional": ["bob"], "duration": 30},
//!   "options": {"trailing_window": "require-duration", "conflict_counting": "per-attendee"}
//! }
//! ```
//!
//! Event bounds are either integer minutes since midnight or `"HH:MM"` clock
//! strings (`"24:00"` is the end of the day). `options` may be omitted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, MeetingRequest};
use crate::options::QueryOptions;
use crate::query::MeetingQuery;
use crate::time_range::{format_clock, parse_clock, TimeRange};

#[derive(Deserialize)]
#[serde(untagged)]
enum MinuteInput {
    Minutes(u32),
    Clock(String),
}

impl MinuteInput {
    fn resolve(&self) -> Result<u32> {
        match self {
            MinuteInput::Minutes(m) => Ok(*m),
            MinuteInput::Clock(s) => parse_clock(s),
        }
    }
}

#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: Option<String>,
    start: MinuteInput,
    end: MinuteInput,
    #[serde(default)]
    attendees: Vec<String>,
}

#[derive(Deserialize)]
struct ScheduleInput {
    #[serde(default)]
    events: Vec<EventInput>,
    request: MeetingRequest,
    #[serde(default)]
    options: QueryOptions,
}

#[derive(Serialize)]
struct RangeDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

impl From<&TimeRange> for RangeDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: format_clock(r.start()),
            end: format_clock(r.end()),
            duration_minutes: r.duration(),
        }
    }
}

/// A parsed schedule document: the day's events, one request and the options
/// to run it with.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub events: Vec<Event>,
    pub request: MeetingRequest,
    pub options: QueryOptions,
}

impl Schedule {
    /// Run the request against the events.
    pub fn run(&self) -> Vec<TimeRange> {
        MeetingQuery::new(self.options).query(&self.events, &self.request)
    }

    /// Every attendee named by an event or the request.
    pub fn attendees(&self) -> BTreeSet<&str> {
        self.events
            .iter()
            .flat_map(|e| e.attendees.iter())
            .chain(self.request.mandatory.iter())
            .chain(self.request.optional.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Parse a schedule document, validating every event's time range.
pub fn parse_schedule(json: &str) -> Result<Schedule> {
    let input: ScheduleInput = serde_json::from_str(json)?;

    let events = input
        .events
        .into_iter()
        .map(|e| {
            let when = TimeRange::new(e.start.resolve()?, e.end.resolve()?)?;
            Ok(Event {
                title: e.title,
                when,
                attendees: e.attendees.into_iter().collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Schedule {
        events,
        request: input.request,
        options: input.options,
    })
}

/// Render ranges as a JSON array of `{start, end, duration_minutes}` objects
/// with `HH:MM` bounds.
pub fn ranges_to_json(ranges: &[TimeRange]) -> Result<String> {
    let dtos: Vec<RangeDto> = ranges.iter().map(RangeDto::from).collect();
    Ok(serde_json::to_string(&dtos)?)
}
