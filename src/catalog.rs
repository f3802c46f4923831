//! Catalog loading.
//!
//! Builds [`Course`] records from pre-extracted spreadsheet rows (the
//! thirteen text columns of the registrar's 기초데이터 sheet). File and
//! sheet I/O happen upstream; this module starts from plain cells.
//!
//! Cell values are noisy: `#`-prefixed placeholders, `미정`/`0` sentinels
//! and blank cells all occur in real exports and are normalized here.
//! Rows without a course code are skipped. Team-taught courses appear as
//! one row per professor with the same code+section and are merged into a
//! single course.

use log::debug;
use thiserror::Error;

use crate::models::{Course, ROOM_UNASSIGNED};
use crate::parser::parse_time_slots;

/// Catalog loading failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Every row was skipped or unrecognizable.
    #[error("no courses recognized in the catalog rows")]
    Empty,
}

/// One raw catalog row, columns in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRow {
    /// 단과대학
    pub college: String,
    /// 학부/학과
    pub department: String,
    /// 전공
    pub major: String,
    /// 학년
    pub year: String,
    /// 학수번호
    pub code: String,
    /// 분반
    pub section: String,
    /// 과목명
    pub name: String,
    /// 이수구분
    pub category: String,
    /// 학-강-실
    pub credit_detail: String,
    /// 교수명
    pub professor: String,
    /// 강의시간
    pub time_spec: String,
    /// 강의실
    pub room_spec: String,
    /// 비고
    pub note: String,
}

impl CatalogRow {
    /// Builds a row from positional cells; missing trailing cells read as
    /// empty, extra cells are ignored.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cell = |i: usize| cells.get(i).map(|c| c.as_ref().to_string()).unwrap_or_default();
        Self {
            college: cell(0),
            department: cell(1),
            major: cell(2),
            year: cell(3),
            code: cell(4),
            section: cell(5),
            name: cell(6),
            category: cell(7),
            credit_detail: cell(8),
            professor: cell(9),
            time_spec: cell(10),
            room_spec: cell(11),
            note: cell(12),
        }
    }
}

/// Whether a cell means "not assigned yet".
fn is_unset(cell: &str) -> bool {
    matches!(cell.trim(), "" | "미정" | "0")
}

/// Builds the course list from catalog rows.
///
/// Rows without a course code are skipped; same-id rows are merged
/// (team teaching). Returns [`CatalogError::Empty`] when nothing remains —
/// the caller decides how to surface that to the user.
pub fn build_courses(rows: &[CatalogRow]) -> Result<Vec<Course>, CatalogError> {
    let mut courses: Vec<Course> = Vec::new();

    for row in rows {
        if row.code.is_empty() {
            debug!("skipping catalog row without a course code: {:?}", row.name);
            continue;
        }

        let course = course_from_row(row);

        match courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => {
                // Team teaching: same course listed once per professor.
                for professor in course.professors {
                    if !existing.professors.contains(&professor) {
                        existing.professors.push(professor);
                    }
                }
            }
            None => courses.push(course),
        }
    }

    if courses.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(courses)
}

fn course_from_row(row: &CatalogRow) -> Course {
    let college = if row.college.is_empty() || row.college.starts_with('#') {
        "기타".to_string()
    } else {
        row.college.clone()
    };
    let year = if row.year.is_empty() {
        "전체".to_string()
    } else {
        row.year.clone()
    };
    let section = pad_section(&row.section);
    let id = format!("{}-{}", row.code, section);

    let (credits, credit_detail) = parse_credits(&row.credit_detail);

    let time_unconfirmed = is_unset(&row.time_spec);
    let room_unconfirmed = is_unset(&row.room_spec);
    let is_time_confirmed = !time_unconfirmed && !room_unconfirmed;

    let time_blocks = if time_unconfirmed {
        Vec::new()
    } else if room_unconfirmed {
        parse_time_slots(&row.time_spec, ROOM_UNASSIGNED)
    } else {
        parse_time_slots(&row.time_spec, &row.room_spec)
    };

    let professors = if is_unset(&row.professor) {
        Vec::new()
    } else {
        vec![row.professor.trim().to_string()]
    };

    Course {
        id,
        code: row.code.clone(),
        section,
        name: row.name.clone(),
        college,
        department: row.department.clone(),
        major: row.major.clone(),
        year,
        credits,
        credit_detail,
        professors,
        category: row.category.clone(),
        time_blocks,
        time_raw: None,
        room_raw: None,
        note: row.note.clone(),
        is_time_confirmed,
        attributes: Default::default(),
    }
}

/// Zero-pads a section to two digits (`"1"` → `"01"`).
fn pad_section(section: &str) -> String {
    if section.len() >= 2 {
        section.to_string()
    } else {
        format!("{section:0>2}")
    }
}

/// Credits are the leading integer of the 학-강-실 string (`"3-3-0"` → 3).
/// Placeholder cells keep zero credits and an unset detail.
pub(crate) fn parse_credits(raw: &str) -> (u32, String) {
    if raw.is_empty() || raw.starts_with('#') {
        return (0, "미정".to_string());
    }
    let credits = raw
        .split('-')
        .next()
        .and_then(|first| first.parse().ok())
        .unwrap_or(0);
    (credits, raw.to_string())
}
