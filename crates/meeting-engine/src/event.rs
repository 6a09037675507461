//! Calendar events and meeting requests.
//!
//! Attendee identifiers are opaque strings held in `BTreeSet`s, so every
//! iteration over attendees happens in sorted order regardless of how the
//! caller built the set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An existing commitment on the day's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Human-readable label. Never affects scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When the event takes place.
    pub when: TimeRange,
    /// Everybody the event keeps busy.
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether any of `attendees` is busy with this event.
    pub fn involves_any(&self, attendees: &BTreeSet<String>) -> bool {
        // Iterate the smaller set.
        if self.attendees.len() <= attendees.len() {
            self.attendees.iter().any(|a| attendees.contains(a))
        } else {
            attendees.iter().any(|a| self.attendees.contains(a))
        }
    }

    pub fn involves(&self, attendee: &str) -> bool {
        self.attendees.contains(attendee)
    }
}

/// A request to find time for a meeting.
///
/// `duration` is signed so that nonsensical requests can still be expressed;
/// anything outside `1..=1440` simply has no feasible slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Attendees whose availability is a hard constraint.
    #[serde(default)]
    pub mandatory: BTreeSet<String>,
    /// Attendees to accommodate where possible.
    #[serde(default)]
    pub optional: BTreeSet<String>,
    /// Required length in minutes.
    pub duration: i64,
}

impl MeetingRequest {
    pub fn new<I, S>(mandatory: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
            duration,
        }
    }

    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional = optional.into_iter().map(Into::into).collect();
        self
    }

    /// Mandatory and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.mandatory.union(&self.optional).cloned().collect()
    }
}
