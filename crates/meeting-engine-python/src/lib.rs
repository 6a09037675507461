//! # meeting-engine-python
//!
//! Python bindings for meeting-engine, built with PyO3.
//!
//! Exposes the following functions to Python as the `meeting_finder` module:
//!
//! - `find_meeting_times(schedule_json)` -- schedule document -> JSON string of slots
//! - `find_meeting_times_for(events, mandatory, optional, duration)` -- the same
//!   search from native Python values

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use meeting_engine::{Event, MeetingRequest, TimeRange};

/// Find every meeting slot described by a schedule document.
///
/// Args:
///     schedule_json: A JSON document with `events`, `request` and optional `options`.
///
/// Returns:
///     A JSON string containing an array of `{start, end, duration_minutes}` objects.
///
/// Raises:
///     ValueError: If the document is not valid JSON or an event range is invalid.
#[pyfunction]
fn find_meeting_times(schedule_json: &str) -> PyResult<String> {
    let schedule =
        meeting_engine::parse_schedule(schedule_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    meeting_engine::ranges_to_json(&schedule.run()).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Find every meeting slot from native Python values.
///
/// Args:
///     events: A list of `(start_minute, end_minute, attendees)` tuples.
///     mandatory: Names of attendees who must attend.
///     optional: Names of attendees to accommodate where possible.
///     duration: Meeting length in minutes.
///
/// Returns:
///     A list of `(start_minute, end_minute)` tuples, sorted by start.
///
/// Raises:
///     ValueError: If an event range is invalid.
#[pyfunction]
#[pyo3(signature = (events, mandatory, optional=Vec::new(), duration=30))]
fn find_meeting_times_for(
    events: Vec<(u32, u32, Vec<String>)>,
    mandatory: Vec<String>,
    optional: Vec<String>,
    duration: i64,
) -> PyResult<Vec<(u32, u32)>> {
    let events = events
        .into_iter()
        .map(|(start, end, attendees)| {
            let when = TimeRange::new(start, end).map_err(|e| PyValueError::new_err(e.to_string()))?;
            Ok(Event::new(when, attendees))
        })
        .collect::<PyResult<Vec<_>>>()?;
    let request = MeetingRequest::new(mandatory, duration).with_optional(optional);

    Ok(meeting_engine::find_meeting_times(&events, &request)
        .into_iter()
        .map(|slot| (slot.start(), slot.end()))
        .collect())
}

/// The `meeting_finder` Python module, implemented in Rust via PyO3.
#[pymodule]
fn meeting_finder(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_meeting_times, m)?)?;
    m.add_function(wrap_pyfunction!(find_meeting_times_for, m)?)?;
    Ok(())
}
