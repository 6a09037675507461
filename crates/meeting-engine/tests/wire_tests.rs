//! Tests for parsing schedule documents and rendering results as JSON.

use meeting_engine::{
    parse_schedule, ranges_to_json, ConflictCounting, EngineError, QueryOptions, TimeRange,
    TrailingWindow,
};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

#[test]
fn parses_clock_and_minute_bounds() {
    let json = r#"{
        "events": [
            {"title": "Standup", "start": "09:00", "end": "09:30", "attendees": ["alice", "bob"]},
            {"start": 720, "end": 780, "attendees": ["alice"]}
        ],
        "request": {"mandatory": ["alice"], "optional": ["bob"], "duration": 30}
    }"#;

    let schedule = parse_schedule(json).unwrap();
    assert_eq!(schedule.events.len(), 2);
    assert_eq!(schedule.events[0].title.as_deref(), Some("Standup"));
    assert_eq!(schedule.events[0].when, range(540, 570));
    assert_eq!(schedule.events[1].when, range(720, 780));
    assert_eq!(schedule.request.duration, 30);
    assert!(schedule.request.optional.contains("bob"));
    assert_eq!(schedule.options, QueryOptions::default());
}

#[test]
fn run_answers_the_request() {
    let json = r#"{
        "events": [{"start": "10:00", "end": "11:00", "attendees": ["A"]}],
        "request": {"mandatory": ["A"], "duration": 30}
    }"#;

    let schedule = parse_schedule(json).unwrap();
    assert_eq!(schedule.run(), vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn options_are_read_from_the_document() {
    let json = r#"{
        "request": {"mandatory": ["A"], "duration": 30},
        "options": {"trailing_window": "unconditional", "conflict_counting": "per-event"}
    }"#;

    let schedule = parse_schedule(json).unwrap();
    assert_eq!(schedule.options.trailing_window, TrailingWindow::Unconditional);
    assert_eq!(schedule.options.conflict_counting, ConflictCounting::PerEvent);
    assert!(schedule.events.is_empty());
}

#[test]
fn partial_options_fill_in_defaults() {
    let options = QueryOptions::from_json(r#"{"conflict_counting": "per-event"}"#).unwrap();
    assert_eq!(options.trailing_window, TrailingWindow::RequireDuration);
    assert_eq!(options.conflict_counting, ConflictCounting::PerEvent);
}

#[test]
fn attendees_collects_everyone_named() {
    let json = r#"{
        "events": [{"start": 0, "end": 60, "attendees": ["A", "B"]}],
        "request": {"mandatory": ["A"], "optional": ["C"], "duration": 30}
    }"#;

    let schedule = parse_schedule(json).unwrap();
    assert_eq!(schedule.attendees().into_iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
}

#[test]
fn backwards_event_is_rejected() {
    let json = r#"{
        "events": [{"start": "11:00", "end": "10:00", "attendees": ["A"]}],
        "request": {"mandatory": ["A"], "duration": 30}
    }"#;

    let err = parse_schedule(json).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRange { start: 660, end: 600 }));
}

#[test]
fn bad_clock_time_is_rejected() {
    let json = r#"{
        "events": [{"start": "9am", "end": "10:00", "attendees": ["A"]}],
        "request": {"mandatory": ["A"], "duration": 30}
    }"#;

    assert!(matches!(parse_schedule(json), Err(EngineError::InvalidTime(_))));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(parse_schedule("{not json"), Err(EngineError::Json(_))));
    assert!(matches!(
        parse_schedule(r#"{"events": []}"#),
        Err(EngineError::Json(_))
    ));
}

#[test]
fn ranges_render_as_clock_times() {
    let json = ranges_to_json(&[range(0, 600), range(660, 1440)]).unwrap();
    assert_eq!(
        json,
        r#"[{"start":"00:00","end":"10:00","duration_minutes":600},{"start":"11:00","end":"24:00","duration_minutes":780}]"#
    );
}

#[test]
fn empty_result_renders_as_empty_array() {
    assert_eq!(ranges_to_json(&[]).unwrap(), "[]");
}
