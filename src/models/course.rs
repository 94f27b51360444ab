//! Course model.
//!
//! A course is the unit a student chooses to include in or exclude from
//! their schedule: one section of one offering, with one or more meeting
//! components (lecture, recitation, lab).
//!
//! # Identity
//! `id` is derived deterministically from course code + section by the
//! data-capture layer, so re-detecting the same section reconciles to
//! the same record. The scheduler relies on that uniqueness for "same
//! course" comparisons but does not enforce it (see [`crate::validation`]).

use serde::{Deserialize, Serialize};

use super::MeetingComponent;

/// One course section a student may schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique, stable identifier (code + section derived).
    pub id: String,
    /// Course code (e.g., "15-213"). Shared across sections of one offering.
    pub code: String,
    /// Course title.
    pub title: String,
    /// Section label (e.g., "A", "Lec 2").
    pub section_label: String,
    /// Credit units (≥ 0).
    pub credits: f64,
    /// Meeting components, in portal order.
    pub components: Vec<MeetingComponent>,
    /// Priority bucket assignment. `None` = unsorted.
    pub bucket_id: Option<String>,
    /// When the course was added (epoch ms).
    pub added_at_ms: i64,
}

impl Course {
    /// Creates a new course with the given id and code.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            title: String::new(),
            section_label: String::new(),
            credits: 0.0,
            components: Vec::new(),
            bucket_id: None,
            added_at_ms: 0,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the section label.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section_label = section.into();
        self
    }

    /// Sets the credit units.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a meeting component.
    pub fn with_component(mut self, component: MeetingComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Assigns the course to a bucket.
    pub fn with_bucket(mut self, bucket_id: impl Into<String>) -> Self {
        self.bucket_id = Some(bucket_id.into());
        self
    }

    /// Sets the added-at timestamp (epoch ms).
    pub fn with_added_at(mut self, added_at_ms: i64) -> Self {
        self.added_at_ms = added_at_ms;
        self
    }

    /// Whether the course has no bucket assignment.
    pub fn is_unsorted(&self) -> bool {
        self.bucket_id.is_none()
    }

    /// Components that participate in conflict checks.
    pub fn schedulable_components(&self) -> impl Iterator<Item = &MeetingComponent> {
        self.components.iter().filter(|c| c.is_schedulable())
    }

    /// Number of meeting components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentType, DayOfWeek, TimeRange};

    #[test]
    fn test_course_builder() {
        let course = Course::new("15-213-A", "15-213")
            .with_title("Introduction to Computer Systems")
            .with_section("A")
            .with_credits(12.0)
            .with_bucket("b-core")
            .with_added_at(1_700_000_000_000);

        assert_eq!(course.id, "15-213-A");
        assert_eq!(course.code, "15-213");
        assert_eq!(course.section_label, "A");
        assert_eq!(course.credits, 12.0);
        assert_eq!(course.bucket_id.as_deref(), Some("b-core"));
        assert!(!course.is_unsorted());
    }

    #[test]
    fn test_unsorted_course() {
        let course = Course::new("c1", "CODE");
        assert!(course.is_unsorted());
        assert_eq!(course.component_count(), 0);
    }

    #[test]
    fn test_course_json_round_trip() {
        let course = Course::new("15-213-A", "15-213")
            .with_title("Introduction to Computer Systems")
            .with_credits(12.0)
            .with_bucket("b-core")
            .with_component(
                MeetingComponent::new(ComponentType::Lecture)
                    .with_days([DayOfWeek::Tuesday, DayOfWeek::Thursday])
                    .with_time_range(TimeRange::from_hm(9, 30, 10, 45)),
            );

        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }

    #[test]
    fn test_schedulable_components_filter() {
        let course = Course::new("c1", "CODE")
            .with_component(
                MeetingComponent::new(ComponentType::Lecture)
                    .with_day(DayOfWeek::Monday)
                    .with_time_range(TimeRange::from_hm(9, 0, 9, 50)),
            )
            .with_component(MeetingComponent::unscheduled(ComponentType::Laboratory));

        assert_eq!(course.component_count(), 2);
        assert_eq!(course.schedulable_components().count(), 1);
    }
}
