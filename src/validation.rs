//! Boundary validation for course/bucket snapshots.
//!
//! Checks structural integrity of a snapshot before scheduling. Detects:
//! - Duplicate course and bucket IDs
//! - Courses with no meeting components
//! - Out-of-range clock fields (hours > 23, minutes > 59)
//! - Inverted or empty time ranges (start ≥ end)
//!
//! The scheduling core itself never validates — it degrades gracefully
//! on sparse or malformed input (unknown buckets rank last, unscheduled
//! components are skipped). This module is for hosts that want to
//! reject a bad snapshot at the capture boundary instead, and it
//! collects every finding rather than failing fast.

use crate::models::{Bucket, Course, TimeRange};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A course has no meeting components.
    EmptyCourse,
    /// A clock field is outside 0–23 / 0–59.
    InvalidClockTime,
    /// A time range does not satisfy start < end.
    InvertedTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a (courses, buckets) snapshot.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate bucket IDs
/// 3. Every course has at least one component
/// 4. Every component time range has in-range clock fields and start < end
///
/// Dangling bucket references are deliberately NOT errors — a bucket
/// deletion racing a course update is a normal host state, and the
/// ranker resolves it to the unsorted sentinel.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(courses: &[Course], buckets: &[Bucket]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut bucket_ids = HashSet::new();
    for b in buckets {
        if !bucket_ids.insert(b.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate bucket ID: {}", b.id),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        if course.components.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course {} has no meeting components", course.id),
            ));
        }

        for (idx, component) in course.components.iter().enumerate() {
            if let Some(range) = &component.time_range {
                check_time_range(&course.id, idx, range, &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_time_range(
    course_id: &str,
    component_idx: usize,
    range: &TimeRange,
    errors: &mut Vec<ValidationError>,
) {
    for t in [range.start, range.end] {
        if t.hours > 23 || t.minutes > 59 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidClockTime,
                format!(
                    "Course {} component {}: clock time {:02}:{:02} out of range",
                    course_id, component_idx, t.hours, t.minutes
                ),
            ));
        }
    }

    if range.start.to_minutes() >= range.end.to_minutes() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedTimeRange,
            format!(
                "Course {} component {}: time range must satisfy start < end",
                course_id, component_idx
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, ComponentType, DayOfWeek, MeetingComponent};

    fn valid_course(id: &str) -> Course {
        Course::new(id, "CODE").with_component(
            MeetingComponent::new(ComponentType::Lecture)
                .with_day(DayOfWeek::Monday)
                .with_time_range(TimeRange::from_hm(9, 0, 9, 50)),
        )
    }

    #[test]
    fn test_valid_snapshot() {
        let courses = vec![valid_course("c1"), valid_course("c2")];
        let buckets = vec![Bucket::new("b1", "Must take")];
        assert!(validate_snapshot(&courses, &buckets).is_ok());
    }

    #[test]
    fn test_duplicate_course_ids() {
        let courses = vec![valid_course("c1"), valid_course("c1")];
        let errors = validate_snapshot(&courses, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("c1"));
    }

    #[test]
    fn test_duplicate_bucket_ids() {
        let buckets = vec![Bucket::new("b1", "A"), Bucket::new("b1", "B")];
        let errors = validate_snapshot(&[], &buckets).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_empty_course() {
        let errors = validate_snapshot(&[Course::new("c1", "CODE")], &[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyCourse);
    }

    #[test]
    fn test_inverted_time_range() {
        let course = Course::new("c1", "CODE").with_component(
            MeetingComponent::new(ComponentType::Lecture)
                .with_day(DayOfWeek::Monday)
                .with_time_range(TimeRange::from_hm(11, 0, 10, 0)),
        );
        let errors = validate_snapshot(&[course], &[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedTimeRange);
    }

    #[test]
    fn test_out_of_range_clock_time() {
        let course = Course::new("c1", "CODE").with_component(
            MeetingComponent::new(ComponentType::Lecture)
                .with_day(DayOfWeek::Monday)
                .with_time_range(TimeRange::new(
                    ClockTime::new(25, 0),
                    ClockTime::new(26, 0),
                )),
        );
        let errors = validate_snapshot(&[course], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidClockTime));
    }

    #[test]
    fn test_dangling_bucket_reference_is_not_an_error() {
        let courses = vec![valid_course("c1").with_bucket("deleted")];
        assert!(validate_snapshot(&courses, &[]).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let courses = vec![
            Course::new("c1", "CODE"), // empty
            Course::new("c1", "CODE"), // duplicate + empty
        ];
        let errors = validate_snapshot(&courses, &[]).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_unscheduled_component_is_fine() {
        let course = Course::new("c1", "CODE")
            .with_component(MeetingComponent::unscheduled(ComponentType::Laboratory));
        assert!(validate_snapshot(&[course], &[]).is_ok());
    }
}
