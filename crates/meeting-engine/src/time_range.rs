//! Half-open minute ranges within a single day.
//!
//! A [`TimeRange`] covers `[start, end)` where both bounds are minutes since
//! midnight and `0 <= start <= end <= 1440`. Ranges are immutable values; every
//! constructor validates the bounds, so a `TimeRange` in hand is always valid.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (inclusive).
pub const END_OF_DAY: u32 = 1439;

/// Number of minutes in the scheduling day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A half-open `[start, end)` range of minutes within one day.
///
/// The derived ordering is by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = EngineError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Build `[start, end)`, rejecting ranges outside the day or running backwards.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end || end > MINUTES_PER_DAY {
            return Err(EngineError::InvalidRange {
                start: start.into(),
                end: end.into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Build a range from bounds already known to be valid, such as the
    /// bounds of other ranges.
    pub(crate) fn between(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= MINUTES_PER_DAY);
        Self { start, end }
    }

    /// Build a range from two bounds. When `inclusive` is true, `end` names the
    /// last minute covered, so `from_start_end(0, END_OF_DAY, true)` is the
    /// whole day.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        if inclusive {
            Self::new(start, end.saturating_add(1))
        } else {
            Self::new(start, end)
        }
    }

    /// Build `[start, start + duration)`.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        match start.checked_add(duration) {
            Some(end) => Self::new(start, end),
            None => Err(EngineError::InvalidRange {
                start: start.into(),
                end: i64::from(start) + i64::from(duration),
            }),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `minute` falls inside the range. An empty range contains nothing.
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ends exactly when the other starts) do not overlap,
    /// and an empty range overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// Order by end, then by start.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end).then(a.start.cmp(&b.start))
    }
}

/// Parse a clock time `HH:MM` into minutes since midnight. `24:00` is accepted
/// as the end of the day.
pub fn parse_clock(s: &str) -> Result<u32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(|t| t.hour() * 60 + t.minute())
        .map_err(|e| EngineError::InvalidTime(format!("'{}': {}", s, e)))
}

/// Format minutes since midnight as `HH:MM`; the end of the day prints as `24:00`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

impl FromStr for TimeRange {
    type Err = EngineError;

    /// Parse `HH:MM-HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| EngineError::InvalidTime(format!("'{}': expected HH:MM-HH:MM", s)))?;
        TimeRange::new(parse_clock(start)?, parse_clock(end)?)
    }
}
