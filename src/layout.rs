//! Weekly layout engine.
//!
//! Turns the current selection into per-day, column-packed blocks for a
//! weekly grid. Overlapping blocks never share a column, and the column
//! count is minimized per overlap cluster rather than per day, so a quiet
//! afternoon is not squeezed by a crowded morning.
//!
//! # Algorithm
//!
//! 1. Per day, collect blocks of confirmed-time courses, merging blocks
//!    that share a `(group, room)` key into one visual block (multi-period
//!    classes are recorded as several consecutive period tokens but render
//!    as one box). Conflict detection keeps comparing the unmerged blocks.
//! 2. Sort by `(start, end)` ascending, stable.
//! 3. Greedy column assignment: each block takes the smallest column not
//!    occupied by an earlier overlapping block.
//! 4. Cluster transitive overlaps with a disjoint-set; each cluster's
//!    `total_columns` is one past its largest assigned column.
//!
//! Layout is recomputed from scratch on every call and owns no state.

use std::collections::{BTreeMap, HashSet};

use crate::conflict::compute_all_conflicts;
use crate::models::{Day, SelectedCourse};

/// Labels distinguishing sub-schedules of a course that meets in more
/// than one `/`-group (lecture / lab), assigned in ascending group order.
const GROUP_LABELS: [&str; 2] = ["이론", "실습"];

/// A block positioned for rendering: grid geometry plus display fields.
///
/// Recomputed from scratch on every layout call; purely output data.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// Owning course id.
    pub course_id: String,
    /// Course name.
    pub course_name: String,
    /// Professors joined for display (`"김교수 · 이교수"`).
    pub professor_label: String,
    /// Room of the merged block.
    pub room: String,
    /// `"이론"` / `"실습"` when the course has more than one group, else `None`.
    pub group_label: Option<&'static str>,
    /// Start, minutes since midnight.
    pub start_min: u16,
    /// End, minutes since midnight.
    pub end_min: u16,
    /// Assigned column within the overlap cluster.
    pub column: usize,
    /// Column count of the overlap cluster this block belongs to.
    pub total_columns: usize,
    /// Display color of the owning selection entry.
    pub color: String,
    /// Whether the owning course is in the conflict set. Annotation only;
    /// conflicting blocks are packed like any other.
    pub is_conflict: bool,
}

impl PlacedBlock {
    fn overlaps(&self, other: &PlacedBlock) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Disjoint-set over block indices, used to cluster transitive overlaps.
///
/// Index arena with a path-compressed parent array; no rank, unions attach
/// the first root under the second.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Lays out the whole week, computing the conflict set internally.
pub fn layout_week(selected: &[SelectedCourse]) -> BTreeMap<Day, Vec<PlacedBlock>> {
    layout_week_with_conflicts(selected, &compute_all_conflicts(selected))
}

/// Lays out the whole week against a precomputed conflict-id set.
pub fn layout_week_with_conflicts(
    selected: &[SelectedCourse],
    conflict_ids: &HashSet<String>,
) -> BTreeMap<Day, Vec<PlacedBlock>> {
    Day::ALL
        .iter()
        .map(|&day| (day, layout_day(selected, day, conflict_ids)))
        .collect()
}

/// Lays out a single day. A day with no confirmed blocks yields an empty
/// list.
pub fn layout_day(
    selected: &[SelectedCourse],
    day: Day,
    conflict_ids: &HashSet<String>,
) -> Vec<PlacedBlock> {
    let mut blocks = collect_day_blocks(selected, day, conflict_ids);

    blocks.sort_by_key(|b| (b.start_min, b.end_min));
    assign_columns(&mut blocks);
    count_cluster_columns(&mut blocks);

    blocks
}

/// Collects one day's renderable blocks: filters to confirmed courses,
/// merges same-`(group, room)` blocks, and attaches display fields.
fn collect_day_blocks(
    selected: &[SelectedCourse],
    day: Day,
    conflict_ids: &HashSet<String>,
) -> Vec<PlacedBlock> {
    let mut blocks = Vec::new();

    for entry in selected {
        let course = &entry.course;
        if !course.is_time_confirmed {
            continue;
        }

        // Group ordinals are derived from the whole course, not just this
        // day, so 이론/실습 labels stay consistent across days.
        let mut groups: Vec<usize> = course.time_blocks.iter().map(|tb| tb.group).collect();
        groups.sort_unstable();
        groups.dedup();
        let has_multiple_groups = groups.len() > 1;

        // Merge this day's blocks per (group, room), first-seen order.
        let mut buckets: Vec<((usize, &str), (u16, u16))> = Vec::new();
        for tb in course.time_blocks.iter().filter(|tb| tb.day == day) {
            let key = (tb.group, tb.room.as_str());
            match buckets.iter_mut().find(|(k, _)| *k == key) {
                Some((_, span)) => {
                    span.0 = span.0.min(tb.start_min());
                    span.1 = span.1.max(tb.end_min());
                }
                None => buckets.push((key, (tb.start_min(), tb.end_min()))),
            }
        }

        for ((group, room), (start_min, end_min)) in buckets {
            let group_label = if has_multiple_groups {
                let ordinal = groups.iter().position(|&g| g == group).unwrap_or(0);
                GROUP_LABELS.get(ordinal).copied()
            } else {
                None
            };

            blocks.push(PlacedBlock {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                professor_label: course.professors.join(" · "),
                room: room.to_string(),
                group_label,
                start_min,
                end_min,
                column: 0,
                total_columns: 1,
                color: entry.color.clone(),
                is_conflict: conflict_ids.contains(&course.id),
            });
        }
    }

    blocks
}

/// Greedy column assignment over blocks sorted by `(start, end)`: block
/// *i* takes the smallest column not held by an earlier overlapping block.
fn assign_columns(blocks: &mut [PlacedBlock]) {
    for i in 0..blocks.len() {
        let occupied: HashSet<usize> = blocks[..i]
            .iter()
            .filter(|b| b.overlaps(&blocks[i]))
            .map(|b| b.column)
            .collect();

        let mut column = 0;
        while occupied.contains(&column) {
            column += 1;
        }
        blocks[i].column = column;
    }
}

/// Clusters directly-overlapping blocks with a disjoint-set and sets each
/// block's `total_columns` to one past the largest column in its cluster.
fn count_cluster_columns(blocks: &mut [PlacedBlock]) {
    let mut sets = DisjointSet::new(blocks.len());
    for i in 0..blocks.len() {
        for j in i + 1..blocks.len() {
            if blocks[i].overlaps(&blocks[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut max_column = vec![0usize; blocks.len()];
    for i in 0..blocks.len() {
        let root = sets.find(i);
        max_column[root] = max_column[root].max(blocks[i].column);
    }
    for i in 0..blocks.len() {
        let root = sets.find(i);
        blocks[i].total_columns = max_column[root] + 1;
    }
}
