//! Free windows for a set of attendees.
//!
//! Walks the day's events in start order and keeps a cursor at the end of the
//! latest busy period seen so far. Events that none of the queried attendees
//! attend are skipped. The cursor only ever moves forward, so nested,
//! overlapping and duplicated events need no merging pass.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::options::TrailingWindow;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// Every maximal window in which none of `attendees` is busy.
///
/// `events` must be sorted ascending by start. Windows before a busy event are
/// kept only when at least `duration` minutes long; the window running to the
/// end of the day follows `trailing`.
pub fn free_slots_for(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
    trailing: TrailingWindow,
) -> Vec<TimeRange> {
    let mut slots = Vec::new();
    let mut prev_end = 0;

    for event in events {
        if event.when.is_empty() || !event.involves_any(attendees) {
            continue;
        }
        if event.when.start() > prev_end {
            let gap = TimeRange::between(prev_end, event.when.start());
            if gap.duration() >= duration {
                slots.push(gap);
            }
        }
        prev_end = prev_end.max(event.when.end());
    }

    if prev_end < MINUTES_PER_DAY {
        let tail = TimeRange::between(prev_end, MINUTES_PER_DAY);
        let keep = match trailing {
            TrailingWindow::RequireDuration => tail.duration() >= duration,
            TrailingWindow::Unconditional => true,
        };
        if keep {
            slots.push(tail);
        }
    }

    slots
}

/// The events `attendee` is on, in their original order.
pub fn events_for_attendee<'a>(events: &'a [Event], attendee: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| e.involves(attendee)).collect()
}
