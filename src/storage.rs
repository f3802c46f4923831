//! Saved-timetable snapshots.
//!
//! JSON encoding of the persisted state: loaded semesters plus the
//! current selection. Field names and value formats match the snapshots
//! written by earlier tooling (camelCase keys, `"HH:MM"` times, weekday
//! glyphs), so existing saves decode unchanged. Where the bytes go is the
//! caller's concern; this module is string-to-string.

use serde::{Deserialize, Serialize};

use crate::models::{Course, SelectedCourse};

/// A loaded semester: one catalog with a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Stable semester key (e.g. `"2025-2"`).
    pub id: String,
    /// Display label (e.g. `"2025학년도 2학기"`).
    pub label: String,
    /// The semester's course catalog.
    pub courses: Vec<Course>,
}

/// Everything persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSnapshot {
    /// Loaded semesters.
    pub semesters: Vec<Semester>,
    /// The selection, verbatim.
    pub selected_courses: Vec<SelectedCourse>,
}

/// Encodes a snapshot to JSON.
pub fn encode_snapshot(snapshot: &TimetableSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(snapshot)
}

/// Decodes a snapshot from JSON.
pub fn decode_snapshot(json: &str) -> Result<TimetableSnapshot, serde_json::Error> {
    serde_json::from_str(json)
}
