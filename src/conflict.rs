//! Time-conflict detection.
//!
//! Two meeting blocks conflict when they fall on the same day and their
//! minute intervals strictly overlap (half-open comparison — blocks that
//! merely touch are compatible). Courses whose meeting time is not
//! confirmed never conflict, whatever placeholder blocks they carry.
//!
//! Both entry points are pure: they take a snapshot of the selection and
//! return freshly built results that borrow nothing from it.

use std::collections::HashSet;

use crate::models::{Course, SelectedCourse, TimeBlock};

/// One conflicting block pair found while testing a candidate course.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictBlock {
    /// The offending block of the candidate course.
    pub new_block: TimeBlock,
    /// Id of the already-selected course it collides with.
    pub existing_course_id: String,
    /// The offending block of that selected course.
    pub existing_block: TimeBlock,
}

/// Result of testing a candidate course against the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConflictInfo {
    /// Whether at least one block pair collides.
    pub is_conflict: bool,
    /// Ids of the selected courses touched, deduplicated, in the order
    /// their first collision was found.
    pub conflicting_course_ids: Vec<String>,
    /// Every colliding block pair, so callers can show exactly which
    /// meeting times collide.
    pub conflicting_blocks: Vec<ConflictBlock>,
}

/// Tests whether adding `candidate` to `selected` would collide in time.
///
/// An unconfirmed-time candidate never conflicts; unconfirmed selected
/// courses and any entry sharing the candidate's id are skipped.
///
/// # Example
///
/// ```
/// use sugang_timetable::conflict::detect_conflict;
/// use sugang_timetable::models::{ClockTime, Course, Day, SelectedCourse, TimeBlock};
///
/// let tue3 = TimeBlock::new(Day::Tue, ClockTime::from_hm(11, 0), ClockTime::from_hm(11, 50), "R1", 0);
/// let candidate = Course::new("A-01").with_time_blocks(vec![tue3.clone()]);
/// let existing = SelectedCourse {
///     course: Course::new("B-01").with_time_blocks(vec![tue3]),
///     color: "#5B8FD6".into(),
/// };
///
/// let info = detect_conflict(&candidate, &[existing]);
/// assert!(info.is_conflict);
/// assert_eq!(info.conflicting_course_ids, vec!["B-01"]);
/// ```
pub fn detect_conflict(candidate: &Course, selected: &[SelectedCourse]) -> ConflictInfo {
    if !candidate.is_time_confirmed {
        return ConflictInfo::default();
    }

    let mut conflicting_blocks = Vec::new();

    for entry in selected {
        let existing = &entry.course;
        if !existing.is_time_confirmed || existing.id == candidate.id {
            continue;
        }

        for new_block in &candidate.time_blocks {
            for existing_block in &existing.time_blocks {
                if new_block.overlaps(existing_block) {
                    conflicting_blocks.push(ConflictBlock {
                        new_block: new_block.clone(),
                        existing_course_id: existing.id.clone(),
                        existing_block: existing_block.clone(),
                    });
                }
            }
        }
    }

    let mut conflicting_course_ids: Vec<String> = Vec::new();
    for cb in &conflicting_blocks {
        if !conflicting_course_ids.contains(&cb.existing_course_id) {
            conflicting_course_ids.push(cb.existing_course_id.clone());
        }
    }

    ConflictInfo {
        is_conflict: !conflicting_blocks.is_empty(),
        conflicting_course_ids,
        conflicting_blocks,
    }
}

/// Computes the set of course ids currently involved in any conflict.
///
/// Pairwise over confirmed-time courses; when any block of A overlaps any
/// block of B, both ids enter the set. The relation is symmetric and has
/// no notion of a pending candidate. Entries sharing an id are never
/// compared against each other, so duplicated ids cannot self-conflict.
pub fn compute_all_conflicts(selected: &[SelectedCourse]) -> HashSet<String> {
    let mut conflict_ids = HashSet::new();

    for (i, a) in selected.iter().enumerate() {
        let a = &a.course;
        if !a.is_time_confirmed {
            continue;
        }

        for b in &selected[i + 1..] {
            let b = &b.course;
            if !b.is_time_confirmed || a.id == b.id {
                continue;
            }

            let collides = a
                .time_blocks
                .iter()
                .any(|ta| b.time_blocks.iter().any(|tb| ta.overlaps(tb)));

            if collides {
                conflict_ids.insert(a.id.clone());
                conflict_ids.insert(b.id.clone());
            }
        }
    }

    conflict_ids
}
