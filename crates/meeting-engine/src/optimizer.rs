//! Pick the windows that exclude the fewest optional attendees.
//!
//! Used once it is known that no window suits every attendee. Each
//! mandatory-feasible window is split around each optional attendee's events;
//! the original windows and all the pieces become candidates, and the
//! candidates with the lowest conflict count win.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::event::Event;
use crate::options::ConflictCounting;
use crate::split::split_by_overlaps;
use crate::sweep::events_for_attendee;
use crate::time_range::TimeRange;

/// Every candidate window that ties for the lowest optional-attendee conflict
/// count, sorted by start then end.
///
/// `events` must be sorted by start and `mandatory_windows` must already be
/// free for every mandatory attendee.
pub fn select_best_windows(
    events: &[Event],
    mandatory_windows: &[TimeRange],
    optional: &BTreeSet<String>,
    duration: u32,
    counting: ConflictCounting,
) -> Vec<TimeRange> {
    let busy: BTreeMap<&str, Vec<&Event>> = optional
        .iter()
        .map(|attendee| (attendee.as_str(), events_for_attendee(events, attendee)))
        .collect();

    let mut candidates: BTreeSet<TimeRange> = mandatory_windows.iter().copied().collect();
    for attendee_events in busy.values() {
        for window in mandatory_windows {
            candidates.extend(split_by_overlaps(*window, attendee_events, duration));
        }
    }

    let scored: Vec<(TimeRange, usize)> = candidates
        .into_iter()
        .map(|window| {
            let score = conflict_count(&window, &busy, counting);
            trace!(%window, score, "scored candidate window");
            (window, score)
        })
        .collect();

    let Some(best) = scored.iter().map(|(_, score)| *score).min() else {
        return Vec::new();
    };

    scored
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(window, _)| window)
        .collect()
}

/// How many optional attendees (or their events) clash with `window`.
fn conflict_count(
    window: &TimeRange,
    busy: &BTreeMap<&str, Vec<&Event>>,
    counting: ConflictCounting,
) -> usize {
    match counting {
        ConflictCounting::PerAttendee => busy
            .values()
            .filter(|events| events.iter().any(|e| e.when.overlaps(window)))
            .count(),
        ConflictCounting::PerEvent => busy
            .values()
            .map(|events| events.iter().filter(|e| e.when.overlaps(window)).count())
            .sum(),
    }
}
