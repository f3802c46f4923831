//! Clock times and meeting intervals.
//!
//! # Time Model
//! All times are minutes since midnight, minute precision. The serialized
//! form is the `"HH:MM"` string used by the source spreadsheets and saved
//! timetables, so snapshots round-trip byte-for-byte.
//!
//! # Overlap
//! Intervals are half-open `[start, end)`: two blocks that merely touch
//! (one ends exactly where the other starts) do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Day;

/// Room value for meetings whose location is not yet assigned.
pub const ROOM_UNASSIGNED: &str = "미정";

/// A wall-clock time of day with minute precision.
///
/// Ordered and compared as minutes since midnight; serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time from hour and minute.
    pub fn from_hm(hour: u16, minute: u16) -> Self {
        ClockTime(hour * 60 + minute)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Parses an `"HH:MM"` string.
    pub fn parse(s: &str) -> Option<Self> {
        let (h, m) = s.split_once(':')?;
        let hour: u16 = h.parse().ok()?;
        let minute: u16 = m.parse().ok()?;
        if minute >= 60 {
            return None;
        }
        Some(ClockTime::from_hm(hour, minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ClockTime::parse(&s).ok_or_else(|| format!("invalid clock time: {s:?}"))
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

/// One contiguous meeting interval of a course.
///
/// `group` is the index of the `/`-separated segment of the source time
/// string that produced this block (0 for the first segment). It
/// distinguishes sub-schedules of one course, e.g. lecture vs. lab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Meeting day.
    pub day: Day,
    /// Start of the interval (inclusive).
    #[serde(rename = "startTime")]
    pub start: ClockTime,
    /// End of the interval (exclusive). Always later than `start`.
    #[serde(rename = "endTime")]
    pub end: ClockTime,
    /// Room, or [`ROOM_UNASSIGNED`] when unknown.
    pub room: String,
    /// Index of the `/`-separated source segment.
    pub group: usize,
}

impl TimeBlock {
    /// Creates a block. Callers must uphold `start < end`.
    pub fn new(day: Day, start: ClockTime, end: ClockTime, room: impl Into<String>, group: usize) -> Self {
        Self {
            day,
            start,
            end,
            room: room.into(),
            group,
        }
    }

    /// Start in minutes since midnight.
    #[inline]
    pub fn start_min(&self) -> u16 {
        self.start.minutes()
    }

    /// End in minutes since midnight.
    #[inline]
    pub fn end_min(&self) -> u16 {
        self.end.minutes()
    }

    /// Whether two blocks overlap in time on the same day.
    ///
    /// Half-open comparison: exactly adjacent blocks do not overlap.
    pub fn overlaps(&self, other: &TimeBlock) -> bool {
        self.day == other.day && self.start_min() < other.end_min() && other.start_min() < self.end_min()
    }
}
