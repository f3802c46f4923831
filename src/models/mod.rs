//! Timetable domain models.
//!
//! Core data types shared by the parser, conflict detector and layout
//! engine: weekdays, the two period regimes, meeting intervals, and the
//! course/selection records built from catalog rows.

mod course;
mod day;
mod period;
mod time_block;

pub use course::{palette_color, Course, SelectedCourse, COURSE_PALETTE};
pub use day::Day;
pub use period::{letter_period, numeric_period, period_time, MAX_NUMERIC_PERIOD};
pub use time_block::{ClockTime, TimeBlock, ROOM_UNASSIGNED};
