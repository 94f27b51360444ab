//! Meeting component model.
//!
//! A meeting component is one physical recurring meeting pattern of a
//! course section (e.g., the MWF lecture or the Thursday lab). A course
//! has one or more components; each component recurs on a set of days
//! at a fixed daily time range.
//!
//! # Unscheduled Components
//! Registration portals list sections whose day/time is "TBA". Such
//! components carry no resolvable day set or time range, are flagged
//! `unscheduled`, and are exempt from conflict checks, the weekly grid,
//! and hour totals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DayOfWeek, TimeRange};

/// Kind of meeting component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Lecture,
    Recitation,
    Laboratory,
    Other,
}

impl ComponentType {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ComponentType::Lecture => "Lecture",
            ComponentType::Recitation => "Recitation",
            ComponentType::Laboratory => "Laboratory",
            ComponentType::Other => "Other",
        }
    }
}

/// One recurring weekly meeting pattern of a course section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingComponent {
    /// Kind of meeting (lecture, recitation, lab, other).
    pub component_type: ComponentType,
    /// Days of the week this meeting recurs on.
    pub days: BTreeSet<DayOfWeek>,
    /// Daily time range. `None` = no resolvable time (TBA).
    pub time_range: Option<TimeRange>,
    /// Room/building label as scraped.
    pub location: String,
    /// Instructor name as scraped.
    pub instructor: String,
    /// Whether no day/time could be determined for this meeting.
    pub unscheduled: bool,
}

impl MeetingComponent {
    /// Creates a scheduled component with empty days/time.
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            component_type,
            days: BTreeSet::new(),
            time_range: None,
            location: String::new(),
            instructor: String::new(),
            unscheduled: false,
        }
    }

    /// Creates a component explicitly marked TBA.
    pub fn unscheduled(component_type: ComponentType) -> Self {
        Self {
            unscheduled: true,
            ..Self::new(component_type)
        }
    }

    /// Adds a recurrence day.
    pub fn with_day(mut self, day: DayOfWeek) -> Self {
        self.days.insert(day);
        self
    }

    /// Sets the recurrence days.
    pub fn with_days(mut self, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    /// Sets the daily time range.
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Whether this component participates in conflict checks and the
    /// weekly grid.
    ///
    /// Requires the component not be flagged TBA, and that it has both
    /// at least one day and a time range. A component missing either is
    /// treated as unscheduled regardless of the flag.
    pub fn is_schedulable(&self) -> bool {
        !self.unscheduled && !self.days.is_empty() && self.time_range.is_some()
    }
}
