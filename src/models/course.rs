//! Course and selection models.
//!
//! A [`Course`] is one schedulable catalog entry (code + section). The
//! engine only interprets `id`, `time_blocks` and `is_time_confirmed`;
//! everything else is descriptive data carried through to callers.
//!
//! Serialized field names match the saved-timetable format of earlier
//! tooling (camelCase), so stored selections load unchanged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TimeBlock;

/// A course offering from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable unique key: `{code}-{section}` for catalog courses, a
    /// synthetic counter key for user-authored ones.
    pub id: String,
    /// Course code (학수번호).
    pub code: String,
    /// Section (분반), zero-padded to two digits.
    pub section: String,
    /// Course name.
    pub name: String,
    /// College (단과대학).
    pub college: String,
    /// Department (학부/학과).
    pub department: String,
    /// Major (전공).
    pub major: String,
    /// Target year: `"1"`..`"5"`, a comma-separated list, or `"전체"`.
    pub year: String,
    /// Credit count.
    pub credits: u32,
    /// Raw credit-lecture-lab string (e.g. `"3-3-0"`), or `"미정"`.
    pub credit_detail: String,
    /// Professors; more than one entry for team-taught courses.
    pub professors: Vec<String>,
    /// Completion category (이수구분).
    pub category: String,
    /// Parsed meeting intervals. Empty when the time is unconfirmed.
    pub time_blocks: Vec<TimeBlock>,
    /// Raw time string as found in the catalog, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_raw: Option<String>,
    /// Raw room string as found in the catalog, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_raw: Option<String>,
    /// Free-text note (비고).
    pub note: String,
    /// Whether the meeting time is confirmed. Unconfirmed courses are
    /// excluded from every overlap computation.
    pub is_time_confirmed: bool,
    /// Extra descriptive attributes (capacity, organizer, …), pass-through.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl Course {
    /// Creates a course with the given id; descriptive fields start empty
    /// and the time is unconfirmed until blocks are attached.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let (code, section) = match id.split_once('-') {
            Some((c, s)) => (c.to_string(), s.to_string()),
            None => (id.clone(), String::new()),
        };
        Self {
            id,
            code,
            section,
            name: String::new(),
            college: String::new(),
            department: String::new(),
            major: String::new(),
            year: "전체".to_string(),
            credits: 0,
            credit_detail: "미정".to_string(),
            professors: Vec::new(),
            category: String::new(),
            time_blocks: Vec::new(),
            time_raw: None,
            room_raw: None,
            note: String::new(),
            is_time_confirmed: false,
            attributes: HashMap::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the completion category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the credit count.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a professor.
    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professors.push(professor.into());
        self
    }

    /// Attaches meeting blocks and marks the time confirmed.
    pub fn with_time_blocks(mut self, blocks: Vec<TimeBlock>) -> Self {
        self.time_blocks = blocks;
        self.is_time_confirmed = true;
        self
    }

    /// Marks the meeting time unconfirmed.
    pub fn unconfirmed(mut self) -> Self {
        self.is_time_confirmed = false;
        self
    }
}

/// A course in the current selection, paired with its display color.
///
/// The selection exclusively owns its entries; the course data itself is a
/// snapshot copied from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCourse {
    /// The selected course.
    pub course: Course,
    /// Display color (hex), assigned from [`COURSE_PALETTE`] by insertion order.
    pub color: String,
}

/// Display palette cycled through by insertion order.
pub const COURSE_PALETTE: [&str; 15] = [
    "#5B8FD6", "#FF6AB3", "#6BC990", "#FFCA44", "#B678D6",
    "#FF7B4D", "#4DB8C2", "#FF6666", "#9670C9", "#4DC9B6",
    "#E5B62A", "#E76B6B", "#90C64D", "#4DA8D6", "#E58E44",
];

/// Palette color for the `n`-th inserted course (wraps around).
pub fn palette_color(n: usize) -> &'static str {
    COURSE_PALETTE[n % COURSE_PALETTE.len()]
}
