//! Selection state.
//!
//! [`TimetableStore`] owns the ordered list of selected courses and the
//! pending-conflict slot used by confirmation flows: adding a course that
//! collides with the current selection parks it as pending instead of
//! inserting, so the caller can ask the user and then either
//! [`force_add`](TimetableStore::force_add) or
//! [`cancel_pending`](TimetableStore::cancel_pending).
//!
//! The store is plain owned state passed by reference to the pure
//! conflict/layout functions; it does no change notification of its own.

use crate::catalog::parse_credits;
use crate::conflict::{detect_conflict, ConflictInfo};
use crate::models::{palette_color, Course, SelectedCourse, TimeBlock};

/// A course held back because it collides with the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConflict {
    /// The course that was not inserted.
    pub course: Course,
    /// The collisions that blocked it.
    pub info: ConflictInfo,
}

/// A user-authored course: the fields a student fills in by hand. Blocks
/// are built directly from the form, one `group` per entered slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomCourse {
    /// Course name (required by callers; the store does not validate it).
    pub name: String,
    /// Professor, empty for none.
    pub professor: String,
    /// 학-강-실 string; blank falls back to `"0-0-0"`.
    pub credit_detail: String,
    /// Meeting blocks.
    pub time_blocks: Vec<TimeBlock>,
}

/// Outcome of [`TimetableStore::add_course`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The course was inserted.
    Added,
    /// The selection already contains this id; nothing changed.
    AlreadySelected,
    /// The course collides and was parked as the pending conflict.
    ConflictPending,
}

/// The current timetable selection.
#[derive(Debug, Clone, Default)]
pub struct TimetableStore {
    selected: Vec<SelectedCourse>,
    pending: Option<PendingConflict>,
    custom_seq: usize,
}

impl TimetableStore {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected courses, in insertion order.
    pub fn selected(&self) -> &[SelectedCourse] {
        &self.selected
    }

    /// The course currently awaiting conflict confirmation, if any.
    pub fn pending_conflict(&self) -> Option<&PendingConflict> {
        self.pending.as_ref()
    }

    /// Whether a course id is in the selection.
    pub fn is_selected(&self, course_id: &str) -> bool {
        self.selected.iter().any(|sc| sc.course.id == course_id)
    }

    /// Number of selected courses.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Adds a course, unless it is already selected or collides with the
    /// selection. A colliding course is parked as the pending conflict
    /// for the caller to confirm or cancel.
    pub fn add_course(&mut self, course: Course) -> AddOutcome {
        if self.is_selected(&course.id) {
            return AddOutcome::AlreadySelected;
        }

        let info = detect_conflict(&course, &self.selected);
        if info.is_conflict {
            self.pending = Some(PendingConflict { course, info });
            return AddOutcome::ConflictPending;
        }

        self.push(course);
        AddOutcome::Added
    }

    /// Inserts a course regardless of conflicts and clears the pending
    /// slot. Returns `false` (and changes nothing) when the id is already
    /// selected.
    pub fn force_add(&mut self, course: Course) -> bool {
        if self.is_selected(&course.id) {
            return false;
        }
        self.push(course);
        self.pending = None;
        true
    }

    /// Adds a user-authored course under a fresh synthetic `custom-N` id,
    /// conflict-gated the same way as [`add_course`](Self::add_course).
    pub fn add_custom_course(&mut self, custom: CustomCourse) -> AddOutcome {
        self.custom_seq += 1;
        let id = format!("custom-{}", self.custom_seq);

        let detail = custom.credit_detail.trim();
        let (credits, credit_detail) = if detail.is_empty() {
            parse_credits("0-0-0")
        } else {
            parse_credits(detail)
        };

        let mut course = Course::new(id)
            .with_name(custom.name)
            .with_credits(credits)
            .with_time_blocks(custom.time_blocks);
        course.credit_detail = credit_detail;
        let professor = custom.professor.trim();
        if !professor.is_empty() {
            course.professors.push(professor.to_string());
        }

        self.add_course(course)
    }

    /// Drops the pending conflict without inserting it.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Removes a course by id. Returns whether anything was removed.
    pub fn remove_course(&mut self, course_id: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|sc| sc.course.id != course_id);
        self.selected.len() != before
    }

    /// Replaces the selection wholesale, e.g. from a loaded snapshot.
    pub fn restore(&mut self, selected: Vec<SelectedCourse>) {
        self.selected = selected;
    }

    fn push(&mut self, course: Course) {
        let color = palette_color(self.selected.len()).to_string();
        self.selected.push(SelectedCourse { course, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, Day, TimeBlock, COURSE_PALETTE};

    fn course(id: &str, day: Day, start: (u16, u16), end: (u16, u16)) -> Course {
        Course::new(id).with_time_blocks(vec![TimeBlock::new(
            day,
            ClockTime::from_hm(start.0, start.1),
            ClockTime::from_hm(end.0, end.1),
            "R1",
            0,
        )])
    }

    #[test]
    fn test_add_assigns_palette_colors_in_order() {
        let mut store = TimetableStore::new();
        assert_eq!(store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50))), AddOutcome::Added);
        assert_eq!(store.add_course(course("B-01", Day::Tue, (9, 0), (9, 50))), AddOutcome::Added);

        assert_eq!(store.selected()[0].color, COURSE_PALETTE[0]);
        assert_eq!(store.selected()[1].color, COURSE_PALETTE[1]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));
        assert_eq!(
            store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50))),
            AddOutcome::AlreadySelected
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_conflicting_add_parks_pending() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));

        let outcome = store.add_course(course("B-01", Day::Mon, (9, 30), (10, 20)));
        assert_eq!(outcome, AddOutcome::ConflictPending);
        assert_eq!(store.len(), 1);

        let pending = store.pending_conflict().unwrap();
        assert_eq!(pending.course.id, "B-01");
        assert_eq!(pending.info.conflicting_course_ids, vec!["A-01"]);
    }

    #[test]
    fn test_force_add_inserts_and_clears_pending() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));
        store.add_course(course("B-01", Day::Mon, (9, 30), (10, 20)));
        assert!(store.pending_conflict().is_some());

        let pending_course = store.pending_conflict().unwrap().course.clone();
        assert!(store.force_add(pending_course));
        assert_eq!(store.len(), 2);
        assert!(store.pending_conflict().is_none());
    }

    #[test]
    fn test_cancel_pending() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));
        store.add_course(course("B-01", Day::Mon, (9, 0), (9, 50)));

        store.cancel_pending();
        assert!(store.pending_conflict().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_course() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));

        assert!(store.remove_course("A-01"));
        assert!(!store.remove_course("A-01"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unconfirmed_course_always_adds() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));

        let unconfirmed = course("B-01", Day::Mon, (9, 0), (9, 50)).unconfirmed();
        assert_eq!(store.add_course(unconfirmed), AddOutcome::Added);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_custom_course_gets_counter_id() {
        let mut store = TimetableStore::new();
        let custom = CustomCourse {
            name: "스터디".to_string(),
            professor: "".to_string(),
            credit_detail: "".to_string(),
            time_blocks: vec![TimeBlock::new(
                Day::Wed,
                ClockTime::from_hm(18, 0),
                ClockTime::from_hm(19, 0),
                "미정",
                0,
            )],
        };

        assert_eq!(store.add_custom_course(custom.clone()), AddOutcome::Added);
        let added = &store.selected()[0].course;
        assert_eq!(added.id, "custom-1");
        assert_eq!(added.credits, 0);
        assert_eq!(added.credit_detail, "0-0-0");
        assert!(added.professors.is_empty());
        assert!(added.is_time_confirmed);

        // Ids keep counting even when the name repeats.
        store.add_custom_course(CustomCourse {
            time_blocks: vec![TimeBlock::new(
                Day::Thu,
                ClockTime::from_hm(18, 0),
                ClockTime::from_hm(19, 0),
                "미정",
                0,
            )],
            ..custom
        });
        assert_eq!(store.selected()[1].course.id, "custom-2");
    }

    #[test]
    fn test_custom_course_conflicts_like_any_other() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));

        let outcome = store.add_custom_course(CustomCourse {
            name: "겹치는 스터디".to_string(),
            credit_detail: "2-2-0".to_string(),
            time_blocks: vec![TimeBlock::new(
                Day::Mon,
                ClockTime::from_hm(9, 30),
                ClockTime::from_hm(10, 20),
                "미정",
                0,
            )],
            ..Default::default()
        });

        assert_eq!(outcome, AddOutcome::ConflictPending);
        let pending = store.pending_conflict().unwrap();
        assert_eq!(pending.course.id, "custom-1");
        assert_eq!(pending.course.credits, 2);
    }

    #[test]
    fn test_restore_replaces_selection() {
        let mut store = TimetableStore::new();
        store.add_course(course("A-01", Day::Mon, (9, 0), (9, 50)));

        let snapshot = vec![SelectedCourse {
            course: course("Z-01", Day::Fri, (14, 0), (14, 50)),
            color: "#FF6AB3".to_string(),
        }];
        store.restore(snapshot);

        assert_eq!(store.len(), 1);
        assert!(store.is_selected("Z-01"));
        assert!(!store.is_selected("A-01"));
    }
}
