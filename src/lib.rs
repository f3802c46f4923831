//! Weekly class-timetable engine.
//!
//! Builds conflict-free weekly class schedules from university course
//! catalogs: parses the registrar's period notation (`화3/금2,3`) into
//! normalized time blocks, detects meeting-time conflicts in a selection,
//! and packs overlapping blocks into side-by-side columns for a weekly
//! grid. Rendering, file I/O and UI state live in the consumer.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, period tables, `ClockTime`,
//!   `TimeBlock`, `Course`, `SelectedCourse`
//! - **`parser`**: Time-string parsing (`parse_time_slots`)
//! - **`conflict`**: Conflict detection (`detect_conflict`,
//!   `compute_all_conflicts`)
//! - **`layout`**: Column-packed weekly layout (`layout_week`)
//! - **`catalog`**: Catalog rows → courses, team-teaching merge
//! - **`filter`**: Catalog filtering
//! - **`store`**: Selection state with conflict-gated adds
//! - **`storage`**: JSON snapshot codec for saved timetables
//!
//! # Architecture
//!
//! The engine is pure and synchronous: conflict detection and layout are
//! functions of a selection snapshot, own no state and never fail. The
//! parser is deliberately lenient — catalog exports are noisy, and a bad
//! token drops out instead of losing the row (see `parser`).
//!
//! # Example
//!
//! ```
//! use sugang_timetable::models::Course;
//! use sugang_timetable::parser::parse_time_slots;
//! use sugang_timetable::store::TimetableStore;
//! use sugang_timetable::layout::layout_week;
//!
//! let course = Course::new("11967-01")
//!     .with_name("자료구조")
//!     .with_time_blocks(parse_time_slots("화3/금2,3", "090411-0/090522-0"));
//!
//! let mut store = TimetableStore::new();
//! store.add_course(course);
//!
//! let week = layout_week(store.selected());
//! assert_eq!(week.values().flatten().count(), 2);
//! ```

pub mod catalog;
pub mod conflict;
pub mod filter;
pub mod layout;
pub mod models;
pub mod parser;
pub mod storage;
pub mod store;
