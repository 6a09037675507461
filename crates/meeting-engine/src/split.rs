//! Carve a free window around one attendee's events.
//!
//! ```text
//! Window: |-------------|      |--------------|
//! Events:      |---|             |--|   |--|
//! Result: |----|   |----|      |-|  |---|  |--|
//! ```

use crate::event::Event;
use crate::time_range::TimeRange;

/// The pieces of `window` that avoid every event in `events`, each at least
/// `duration` minutes long.
///
/// Events that do not overlap `window` are ignored. Pieces come out in start
/// order when `events` is sorted by start.
pub fn split_by_overlaps(window: TimeRange, events: &[&Event], duration: u32) -> Vec<TimeRange> {
    let mut pieces = Vec::new();
    let mut cursor = window.start();

    for event in events {
        if !window.overlaps(&event.when) {
            continue;
        }
        if event.when.start() > cursor {
            let piece = TimeRange::between(cursor, event.when.start());
            if piece.duration() >= duration {
                pieces.push(piece);
            }
        }
        cursor = cursor.max(event.when.end());
    }

    if cursor < window.end() {
        let tail = TimeRange::between(cursor, window.end());
        if tail.duration() >= duration {
            pieces.push(tail);
        }
    }

    pieces
}
