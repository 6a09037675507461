//! Tests for the `TimeRange` primitive: construction, containment, overlap,
//! ordering and clock-time formatting.

use meeting_engine::time_range::{format_clock, parse_clock, END_OF_DAY, START_OF_DAY};
use meeting_engine::{EngineError, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn whole_day_spans_1440_minutes() {
    assert_eq!(TimeRange::WHOLE_DAY.start(), 0);
    assert_eq!(TimeRange::WHOLE_DAY.end(), 1440);
    assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
}

#[test]
fn inclusive_end_adds_one_minute() {
    let r = TimeRange::from_start_end(START_OF_DAY, END_OF_DAY, true).unwrap();
    assert_eq!(r, TimeRange::WHOLE_DAY);

    let r = TimeRange::from_start_end(600, 660, false).unwrap();
    assert_eq!(r.duration(), 60);
}

#[test]
fn from_start_duration_builds_end() {
    let r = TimeRange::from_start_duration(540, 30).unwrap();
    assert_eq!(r, range(540, 570));
}

#[test]
fn backwards_range_is_rejected() {
    let err = TimeRange::new(600, 540).unwrap_err();
    assert!(matches!(err, EngineError::InvalidRange { start: 600, end: 540 }));
}

#[test]
fn range_past_end_of_day_is_rejected() {
    assert!(TimeRange::new(1400, 1441).is_err());
    assert!(TimeRange::from_start_duration(1430, 30).is_err());
    assert!(TimeRange::from_start_end(0, 1440, true).is_err());
}

#[test]
fn empty_range_is_valid() {
    let r = range(600, 600);
    assert!(r.is_empty());
    assert_eq!(r.duration(), 0);
}

// ── Containment and overlap ─────────────────────────────────────────────────

#[test]
fn contains_minute_is_half_open() {
    let r = range(600, 660);
    assert!(r.contains_minute(600));
    assert!(r.contains_minute(659));
    assert!(!r.contains_minute(660));
    assert!(!r.contains_minute(599));
    assert!(!range(600, 600).contains_minute(600));
}

#[test]
fn contains_nested_range() {
    let outer = range(540, 720);
    assert!(outer.contains(&range(600, 660)));
    assert!(outer.contains(&outer));
    assert!(!outer.contains(&range(500, 600)));
}

#[test]
fn overlapping_ranges_detected_both_ways() {
    let a = range(540, 600);
    let b = range(570, 630);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = range(540, 600);
    let b = range(600, 660);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn empty_range_overlaps_nothing() {
    assert!(!range(600, 600).overlaps(&TimeRange::WHOLE_DAY));
    assert!(!TimeRange::WHOLE_DAY.overlaps(&range(600, 600)));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn default_order_is_start_then_end() {
    let mut ranges = vec![range(600, 700), range(0, 30), range(600, 630)];
    ranges.sort();
    assert_eq!(ranges, vec![range(0, 30), range(600, 630), range(600, 700)]);
}

#[test]
fn by_end_order_sorts_on_end_first() {
    let mut ranges = vec![range(0, 700), range(650, 660), range(600, 660)];
    ranges.sort_by(TimeRange::cmp_by_end);
    assert_eq!(ranges, vec![range(600, 660), range(650, 660), range(0, 700)]);
}

// ── Clock formatting ────────────────────────────────────────────────────────

#[test]
fn display_uses_clock_times() {
    assert_eq!(range(540, 615).to_string(), "09:00-10:15");
    assert_eq!(TimeRange::WHOLE_DAY.to_string(), "00:00-24:00");
}

#[test]
fn parse_range_from_clock_times() {
    let r: TimeRange = "09:00-10:15".parse().unwrap();
    assert_eq!(r, range(540, 615));

    let r: TimeRange = "22:00-24:00".parse().unwrap();
    assert_eq!(r, range(1320, 1440));
}

#[test]
fn parse_rejects_garbage() {
    assert!("09:00".parse::<TimeRange>().is_err());
    assert!("10:00-09:00".parse::<TimeRange>().is_err());
    assert!(matches!(parse_clock("25:00"), Err(EngineError::InvalidTime(_))));
    assert!(parse_clock("noon").is_err());
}

#[test]
fn clock_roundtrip_for_whole_hours() {
    for minute in (0..=1440).step_by(60) {
        assert_eq!(parse_clock(&format_clock(minute)).unwrap(), minute);
    }
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn deserialize_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":60,"end":120}"#).unwrap();
    assert_eq!(ok, range(60, 120));

    let bad = serde_json::from_str::<TimeRange>(r#"{"start":120,"end":60}"#);
    assert!(bad.is_err());
}
