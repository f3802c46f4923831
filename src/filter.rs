//! Course filtering.
//!
//! Narrow a catalog down by keyword, category, college, department, year,
//! meeting day and credits. Every criterion left empty matches all
//! courses, so the default filter is a no-op.

use crate::models::{Course, Day};

/// Filter criteria over a course catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    /// Case-insensitive substring matched against name, professors and
    /// department.
    pub keyword: String,
    /// Completion categories, matched as prefixes (`"전"` matches 전필
    /// and 전선).
    pub categories: Vec<String>,
    /// Colleges, exact membership.
    pub colleges: Vec<String>,
    /// Departments, exact membership.
    pub departments: Vec<String>,
    /// Target years, matched against the course's comma-separated years.
    pub years: Vec<String>,
    /// Meeting days; a course matches when any block falls on one.
    pub days: Vec<Day>,
    /// Credit counts, exact membership.
    pub credits: Vec<u32>,
    /// Keep only courses with a confirmed meeting time.
    pub time_confirmed_only: bool,
}

impl CourseFilter {
    /// Creates an empty filter that matches every course.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Adds a category criterion.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Adds a meeting-day criterion.
    pub fn with_day(mut self, day: Day) -> Self {
        self.days.push(day);
        self
    }

    /// Keeps only confirmed-time courses.
    pub fn confirmed_only(mut self) -> Self {
        self.time_confirmed_only = true;
        self
    }

    /// Whether one course passes every criterion.
    pub fn matches(&self, course: &Course) -> bool {
        if !self.keyword.is_empty() {
            let kw = self.keyword.to_lowercase();
            let in_name = course.name.to_lowercase().contains(&kw);
            let in_professors = course
                .professors
                .iter()
                .any(|p| p.to_lowercase().contains(&kw));
            let in_department = course.department.to_lowercase().contains(&kw);
            if !in_name && !in_professors && !in_department {
                return false;
            }
        }

        if !self.categories.is_empty()
            && !self
                .categories
                .iter()
                .any(|cat| course.category.starts_with(cat.as_str()))
        {
            return false;
        }

        if !self.colleges.is_empty() && !self.colleges.contains(&course.college) {
            return false;
        }
        if !self.departments.is_empty() && !self.departments.contains(&course.department) {
            return false;
        }

        if !self.years.is_empty() {
            let mut course_years = course.year.split(',').map(str::trim);
            if !course_years.any(|y| self.years.iter().any(|wanted| wanted == y)) {
                return false;
            }
        }

        if !self.days.is_empty()
            && !course
                .time_blocks
                .iter()
                .any(|tb| self.days.contains(&tb.day))
        {
            return false;
        }

        if !self.credits.is_empty() && !self.credits.contains(&course.credits) {
            return false;
        }

        if self.time_confirmed_only && !course.is_time_confirmed {
            return false;
        }

        true
    }
}

/// Applies a filter to a catalog, keeping catalog order.
pub fn filter_courses<'a>(courses: &'a [Course], filter: &CourseFilter) -> Vec<&'a Course> {
    courses.iter().filter(|c| filter.matches(c)).collect()
}
