//! Top-level entry point.
//!
//! Each step of [`MeetingQuery::query`] either answers or hands off to the
//! next one:
//!
//! 1. A duration outside `1..=1440` has no answer.
//! 2. An empty calendar leaves the whole day open.
//! 3. Without optional attendees, the mandatory attendees' free windows are the answer.
//! 4. Windows free for mandatory and optional attendees alike win outright.
//! 5. Otherwise the optimizer picks the mandatory windows (or pieces of them)
//!    that exclude the fewest optional attendees. With no mandatory attendee to
//!    anchor the search there is no answer.

use tracing::debug;

use crate::event::{Event, MeetingRequest};
use crate::optimizer::select_best_windows;
use crate::options::QueryOptions;
use crate::sweep::free_slots_for;
use crate::time_range::{TimeRange, MINUTES_PER_DAY};

/// A reusable, stateless meeting finder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingQuery {
    options: QueryOptions,
}

impl MeetingQuery {
    pub fn new(options: QueryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Every slot in which the meeting can take place, sorted by start then end.
    ///
    /// `events` may be in any order. An empty result means no feasible time.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        let duration = match u32::try_from(request.duration) {
            Ok(d) if d > 0 && d <= MINUTES_PER_DAY => d,
            _ => {
                debug!(duration = request.duration, "duration outside the day, no slots");
                return Vec::new();
            }
        };

        if events.is_empty() {
            debug!("no events, whole day is free");
            return vec![TimeRange::WHOLE_DAY];
        }

        let mut sorted = events.to_vec();
        sorted.sort_by(|a, b| a.when.cmp(&b.when));
        let trailing = self.options.trailing_window;

        if request.optional.is_empty() {
            debug!(mandatory = request.mandatory.len(), "mandatory attendees only");
            return free_slots_for(&sorted, &request.mandatory, duration, trailing);
        }

        let everyone = free_slots_for(&sorted, &request.all_attendees(), duration, trailing);
        if !everyone.is_empty() {
            debug!(slots = everyone.len(), "every attendee can make it");
            return everyone;
        }

        if request.mandatory.is_empty() {
            debug!("no shared slot for optional attendees and nobody is mandatory");
            return Vec::new();
        }

        let mandatory_windows = free_slots_for(&sorted, &request.mandatory, duration, trailing);
        debug!(
            windows = mandatory_windows.len(),
            optional = request.optional.len(),
            "no slot suits everyone, minimizing optional conflicts"
        );
        select_best_windows(
            &sorted,
            &mandatory_windows,
            &request.optional,
            duration,
            self.options.conflict_counting,
        )
    }
}

/// Run a query with the default [`QueryOptions`].
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    MeetingQuery::default().query(events, request)
}
