//! WASM bindings for meeting-engine.
//!
//! Exposes the meeting slot search and the plain free-window sweep to
//! JavaScript via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! # Rename .js -> .cjs for ESM compatibility
//! mv packages/meeting-engine-js/wasm/meeting_engine_wasm.js \
//!    packages/meeting-engine-js/wasm/meeting_engine_wasm.cjs
//! ```

use std::collections::BTreeSet;

use meeting_engine::sweep::free_slots_for;
use meeting_engine::time_range::MINUTES_PER_DAY;
use meeting_engine::{Event, TimeRange, TrailingWindow};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Input format for events passed from JavaScript to `freeSlots`.
#[derive(Deserialize)]
struct EventInput {
    start: u32,
    end: u32,
    #[serde(default)]
    attendees: Vec<String>,
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Find every slot that fits the request in a schedule document.
///
/// `schedule_json` is a document with `events`, `request` and optional
/// `options` (see `meeting_engine::wire`). Returns a JSON array of
/// `{start, end, duration_minutes}` objects with `HH:MM` bounds.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = meeting_engine::parse_schedule(schedule_json).map_err(to_js_error)?;
    meeting_engine::ranges_to_json(&schedule.run()).map_err(to_js_error)
}

/// Free windows for a group of attendees, ignoring optional attendees.
///
/// `events_json` is a JSON array of `{start, end, attendees}` objects with
/// minute bounds; `attendees_json` is a JSON array of names. Windows shorter
/// than `duration_minutes` are dropped.
#[wasm_bindgen(js_name = "freeSlots")]
pub fn free_slots(
    events_json: &str,
    attendees_json: &str,
    duration_minutes: u32,
) -> Result<String, JsValue> {
    if duration_minutes == 0 || duration_minutes > MINUTES_PER_DAY {
        return Err(JsValue::from_str("duration_minutes must be between 1 and 1440"));
    }

    let inputs: Vec<EventInput> = serde_json::from_str(events_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;
    let attendees: BTreeSet<String> = serde_json::from_str(attendees_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid attendees JSON: {}", e)))?;

    let mut events = inputs
        .into_iter()
        .map(|input| {
            let when = TimeRange::new(input.start, input.end).map_err(to_js_error)?;
            Ok(Event::new(when, input.attendees))
        })
        .collect::<Result<Vec<_>, JsValue>>()?;
    events.sort_by(|a, b| a.when.cmp(&b.when));

    let slots = free_slots_for(
        &events,
        &attendees,
        duration_minutes,
        TrailingWindow::RequireDuration,
    );
    meeting_engine::ranges_to_json(&slots).map_err(to_js_error)
}
