//! Time-string parser.
//!
//! Converts the catalog's free-form meeting-time strings (e.g. `화3/금2,3`)
//! and room strings (e.g. `090411-0/090522-0`) into [`TimeBlock`] lists.
//!
//! # Grammar
//!
//! - `/` splits a spec into **segments**; segment *i* of the time string
//!   pairs with segment *i* of the room string when the room string also
//!   contains `/`, otherwise all segments share the single room. The
//!   segment index becomes the block's `group`, counted positionally —
//!   empty segments are skipped but still occupy their index.
//! - Within a segment, `,` splits tokens. A token starting with a weekday
//!   glyph switches the current day; a bare token inherits the most
//!   recently seen day of that segment.
//! - Period tokens resolve through the period table; a purely numeric run
//!   whose value exceeds the highest numeric period is re-read as single
//!   digits (`"123"` → periods 1, 2, 3).
//!
//! # Leniency
//!
//! Catalog data is noisy, so this parser never fails: unresolvable tokens
//! are dropped (logged at trace level) and malformed input degrades to an
//! empty result. Sentinel specs (`""`, `"미정"`, `"0"`) mean "unscheduled"
//! and produce no blocks.

use log::trace;

use crate::models::{
    numeric_period, period_time, ClockTime, Day, TimeBlock, MAX_NUMERIC_PERIOD, ROOM_UNASSIGNED,
};

/// Parses a meeting-time spec and its room spec into time blocks.
///
/// # Example
///
/// ```
/// use sugang_timetable::parser::parse_time_slots;
/// use sugang_timetable::models::Day;
///
/// let blocks = parse_time_slots("화3/금2,3", "090411-0/090522-0");
/// assert_eq!(blocks.len(), 3);
/// assert_eq!(blocks[0].day, Day::Tue);
/// assert_eq!(blocks[0].group, 0);
/// assert_eq!(blocks[1].room, "090522-0");
/// assert_eq!(blocks[1].group, 1);
/// ```
pub fn parse_time_slots(time_spec: &str, room_spec: &str) -> Vec<TimeBlock> {
    let trimmed = time_spec.trim();
    if trimmed.is_empty() || trimmed == ROOM_UNASSIGNED || trimmed == "0" {
        return Vec::new();
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    let rooms: Vec<&str> = room_spec.split('/').collect();
    let mut blocks = Vec::new();

    for (group, segment) in segments.iter().enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            continue; // a dangling "/" leaves an empty segment
        }

        let room = segment_room(&rooms, group);

        for (day, token) in parse_segment(segment) {
            for (start, end) in resolve_periods(&token) {
                blocks.push(TimeBlock::new(day, start, end, room, group));
            }
        }
    }

    blocks
}

/// Room for segment `index`: positional when the room spec itself is
/// `/`-split, shared otherwise. Blank entries fall back to `"미정"`.
fn segment_room<'a>(rooms: &[&'a str], index: usize) -> &'a str {
    let raw = if rooms.len() > 1 {
        rooms.get(index).copied().unwrap_or("")
    } else {
        rooms.first().copied().unwrap_or("")
    };
    let raw = raw.trim();
    if raw.is_empty() {
        ROOM_UNASSIGNED
    } else {
        raw
    }
}

/// Splits one `/`-free segment into (day, period-token) pairs.
///
/// A token whose first character is a weekday glyph sets the current day
/// for itself and all following bare tokens; bare tokens before any day
/// glyph are dropped.
fn parse_segment(segment: &str) -> Vec<(Day, String)> {
    let mut pairs = Vec::new();
    let mut current_day: Option<Day> = None;

    for token in segment.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mut chars = token.chars();
        let first = chars.next();

        if let Some(day) = first.and_then(Day::from_glyph) {
            current_day = Some(day);
            let rest: String = chars.collect();
            if !rest.is_empty() {
                pairs.push((day, rest));
            }
        } else if let Some(day) = current_day {
            pairs.push((day, token.to_string()));
        } else {
            trace!("dropping day-less token {token:?}");
        }
    }

    pairs
}

/// Resolves one period token into zero or more clock ranges.
///
/// Ordinary tokens go through the period table. A purely numeric token
/// whose value exceeds [`MAX_NUMERIC_PERIOD`] is a run of single-digit
/// periods recorded without separators; it is re-read digit by digit.
/// This re-reading is only sound while the numeric table stays
/// single-digit-resolvable below its ceiling.
fn resolve_periods(token: &str) -> Vec<(ClockTime, ClockTime)> {
    if let Some(range) = period_time(token) {
        return vec![range];
    }

    let digits_only = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit());
    let past_ceiling = token
        .parse::<u32>()
        .map_or(true, |v| v > MAX_NUMERIC_PERIOD);
    if digits_only && past_ceiling {
        return token
            .chars()
            .filter_map(|c| numeric_period(c.to_digit(10)?))
            .collect();
    }

    trace!("dropping unresolvable period token {token:?}");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(block: &TimeBlock) -> String {
        format!(
            "{} {}-{} {} g{}",
            block.day, block.start, block.end, block.room, block.group
        )
    }

    #[test]
    fn test_single_day_numeric_run() {
        let blocks = parse_time_slots("목1,2,3,4", "101001-0");

        assert_eq!(blocks.len(), 4);
        assert_eq!(fmt(&blocks[0]), "목 09:00-09:50 101001-0 g0");
        assert_eq!(fmt(&blocks[1]), "목 10:00-10:50 101001-0 g0");
        assert_eq!(fmt(&blocks[2]), "목 11:00-11:50 101001-0 g0");
        assert_eq!(fmt(&blocks[3]), "목 12:00-12:50 101001-0 g0");
    }

    #[test]
    fn test_two_days_letter_periods() {
        let blocks = parse_time_slots("월A,수A", "101001-0");

        assert_eq!(blocks.len(), 2);
        assert_eq!(fmt(&blocks[0]), "월 09:00-10:15 101001-0 g0");
        assert_eq!(fmt(&blocks[1]), "수 09:00-10:15 101001-0 g0");
    }

    #[test]
    fn test_day_inherited_until_next_glyph() {
        let blocks = parse_time_slots("화2,3,목2,3", "101001-0");

        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].day, Day::Tue);
        assert_eq!(blocks[1].day, Day::Tue);
        assert_eq!(blocks[2].day, Day::Thu);
        assert_eq!(blocks[3].day, Day::Thu);
    }

    #[test]
    fn test_slash_groups_with_split_rooms() {
        let blocks = parse_time_slots("화3/금2,3", "090411-0/090522-0");

        assert_eq!(blocks.len(), 3);
        assert_eq!(fmt(&blocks[0]), "화 11:00-11:50 090411-0 g0");
        assert_eq!(fmt(&blocks[1]), "금 10:00-10:50 090522-0 g1");
        assert_eq!(fmt(&blocks[2]), "금 11:00-11:50 090522-0 g1");
    }

    #[test]
    fn test_shared_room_across_groups() {
        let blocks = parse_time_slots("화3/금2", "101001-0");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].room, "101001-0");
        assert_eq!(blocks[1].room, "101001-0");
        assert_eq!(blocks[1].group, 1);
    }

    #[test]
    fn test_leading_empty_segment_keeps_group_index() {
        let blocks = parse_time_slots("/월2", "/090411-0");

        assert_eq!(blocks.len(), 1);
        assert_eq!(fmt(&blocks[0]), "월 10:00-10:50 090411-0 g1");
    }

    #[test]
    fn test_trailing_empty_segment() {
        let blocks = parse_time_slots("화2,3/", "090411-0/");

        assert_eq!(blocks.len(), 2);
        assert_eq!(fmt(&blocks[0]), "화 10:00-10:50 090411-0 g0");
        assert_eq!(fmt(&blocks[1]), "화 11:00-11:50 090411-0 g0");
    }

    #[test]
    fn test_sentinels_yield_no_blocks() {
        assert!(parse_time_slots("미정", "미정").is_empty());
        assert!(parse_time_slots("", "R1").is_empty());
        assert!(parse_time_slots("  ", "R1").is_empty());
        assert!(parse_time_slots("0", "R1").is_empty());
    }

    #[test]
    fn test_evening_periods() {
        let blocks = parse_time_slots("목8,9,10,11,12,13", "101001-0");

        assert_eq!(blocks.len(), 6);
        assert_eq!(blocks[0].start.to_string(), "16:00");
        assert_eq!(blocks[5].start.to_string(), "21:00");
        assert_eq!(blocks[5].end.to_string(), "21:50");
    }

    #[test]
    fn test_digit_run_past_ceiling_splits() {
        // "123" cannot be a period (max 13), so it is a run of 1, 2, 3.
        let blocks = parse_time_slots("월123", "R1");

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].start.to_string(), "09:00");
        assert_eq!(blocks[1].start.to_string(), "10:00");
        assert_eq!(blocks[2].start.to_string(), "11:00");
    }

    #[test]
    fn test_two_digit_periods_below_ceiling_stay_whole() {
        let blocks = parse_time_slots("월10", "R1");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].start.to_string(), "18:00");
    }

    #[test]
    fn test_unresolvable_tokens_dropped_silently() {
        // "X" is no period; the rest of the spec still parses.
        let blocks = parse_time_slots("월2,X,3", "R1");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start.to_string(), "10:00");
        assert_eq!(blocks[1].start.to_string(), "11:00");
    }

    #[test]
    fn test_dayless_leading_token_dropped() {
        // No day seen yet → "2" has nothing to attach to.
        let blocks = parse_time_slots("2,월3", "R1");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day, Day::Mon);
    }

    #[test]
    fn test_blank_room_becomes_unassigned() {
        let blocks = parse_time_slots("월2", "  ");
        assert_eq!(blocks[0].room, ROOM_UNASSIGNED);

        // Split rooms with a missing entry fall back the same way.
        let blocks = parse_time_slots("월2/화3", "R1/");
        assert_eq!(blocks[1].room, ROOM_UNASSIGNED);
    }

    #[test]
    fn test_day_glyph_alone_sets_day_without_block() {
        // "월" carries no period; "2" then inherits Monday.
        let blocks = parse_time_slots("월,2", "R1");

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day, Day::Mon);
        assert_eq!(blocks[0].start.to_string(), "10:00");
    }

    #[test]
    fn test_saturday_parses() {
        let blocks = parse_time_slots("토1", "R1");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day, Day::Sat);
    }
}
