//! Flattened occurrence model.
//!
//! An occurrence is one recurring weekly time slot derived from a single
//! meeting component, with the owning course's metadata denormalized in
//! for query convenience. The conflict detector and the weekly grid work
//! exclusively on occurrences — a course with N components flattens to
//! N occurrences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{ComponentType, Course, DayOfWeek, MeetingComponent, TimeRange};

/// A flattened, course-agnostic weekly time slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Occurrence {
    /// Owning course ID.
    pub course_id: String,
    /// Owning course code (denormalized).
    pub course_code: String,
    /// Owning course title (denormalized).
    pub course_title: String,
    /// Owning course credits (denormalized).
    pub credits: f64,
    /// Owning course bucket (denormalized).
    pub bucket_id: Option<String>,
    /// Kind of meeting this slot comes from.
    pub component_type: ComponentType,
    /// Recurrence days.
    pub days: BTreeSet<DayOfWeek>,
    /// Daily time range. `None` = unscheduled.
    pub time_range: Option<TimeRange>,
}

impl Occurrence {
    /// Builds an occurrence from a course and one of its components.
    pub fn from_component(course: &Course, component: &MeetingComponent) -> Self {
        Self {
            course_id: course.id.clone(),
            course_code: course.code.clone(),
            course_title: course.title.clone(),
            credits: course.credits,
            bucket_id: course.bucket_id.clone(),
            component_type: component.component_type,
            days: component.days.clone(),
            time_range: component.time_range,
        }
    }

    /// Whether this slot participates in conflict checks and the grid.
    pub fn is_scheduled(&self) -> bool {
        !self.days.is_empty() && self.time_range.is_some()
    }
}

/// Flattens courses into occurrences.
///
/// Order is preserved: course order, then component order within each
/// course. Unscheduled components are flattened too (carrying no days
/// or time range) so callers can still count them; they are skipped by
/// every consumer that requires a time slot.
pub fn flatten(courses: &[Course]) -> Vec<Occurrence> {
    courses
        .iter()
        .flat_map(|course| {
            course
                .components
                .iter()
                .map(|component| Occurrence::from_component(course, component))
        })
        .collect()
}
