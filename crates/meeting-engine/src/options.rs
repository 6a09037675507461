//! Policy knobs for the corners of the algorithm with more than one
//! reasonable answer.
//!
//! The defaults guarantee that every returned slot is at least as long as the
//! requested duration and that an optional attendee counts once per window no
//! matter how many of their events overlap it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do with the free window running up to the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingWindow {
    /// Emit it only when it fits the requested duration.
    #[default]
    RequireDuration,
    /// Always emit it when non-empty, even if it is shorter than requested.
    Unconditional,
}

/// How optional-attendee conflicts are tallied for a candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictCounting {
    /// One per optional attendee with any overlapping event.
    #[default]
    PerAttendee,
    /// One per overlapping event, per optional attendee on it.
    PerEvent,
}

/// Options for a [`MeetingQuery`](crate::MeetingQuery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub trailing_window: TrailingWindow,
    pub conflict_counting: ConflictCounting,
}

impl QueryOptions {
    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_trailing_window(mut self, policy: TrailingWindow) -> Self {
        self.trailing_window = policy;
        self
    }

    pub fn with_conflict_counting(mut self, counting: ConflictCounting) -> Self {
        self.conflict_counting = counting;
        self
    }
}
