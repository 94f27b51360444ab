//! Greedy priority-driven schedule generation.
//!
//! # Algorithm
//!
//! 1. Rank the course pool by bucket priority (stable, ascending).
//! 2. Walk the ranked list in order, no backtracking.
//! 3. For each course, check its schedulable components against the
//!    occurrences of every course admitted so far.
//! 4. Any collision rejects the course in its entirety; otherwise the
//!    course is admitted and its occurrences join the occupied set.
//!
//! First-come-first-served admission driven purely by bucket priority
//! and addition order: higher-priority buckets always win ties and are
//! always seated first. No alternative-section substitution is attempted
//! during admission — [`suggest_alternatives`] is a separate query.
//!
//! # Complexity
//! O(n² · m²) in courses × components per course; n is a student's
//! shopping cart, so this is far below any practical limit.

use serde::{Deserialize, Serialize};

use super::conflict::{find_conflicts, ConflictDetail};
use super::ranking::rank_by_priority;
use crate::models::{Bucket, Course, Occurrence};

/// A rejected course together with everything it collided with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseConflicts {
    /// The rejected course.
    pub course: Course,
    /// Every colliding pair, in discovery order.
    pub conflicts_with: Vec<ConflictDetail>,
}

/// Outcome of one scheduling run.
///
/// Invariant: `rejected` and `conflicts` name exactly the same courses —
/// a course is never rejected without at least one recorded conflict,
/// and `scheduled` + `rejected` partition the input pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleResult {
    /// Courses admitted into the conflict-free schedule, in admission order.
    pub scheduled: Vec<Course>,
    /// Rejected courses with their conflict details.
    pub conflicts: Vec<CourseConflicts>,
    /// Rejected courses, in rejection order.
    pub rejected: Vec<Course>,
}

impl ScheduleResult {
    /// Whether every course in the pool was admitted.
    pub fn is_conflict_free(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Total number of courses processed.
    pub fn course_count(&self) -> usize {
        self.scheduled.len() + self.rejected.len()
    }

    /// Sum of credits across admitted courses.
    pub fn scheduled_credits(&self) -> f64 {
        self.scheduled.iter().map(|c| c.credits).sum()
    }
}

/// Greedy priority-driven schedule generator.
///
/// Pure and deterministic: the same (courses, buckets) snapshot always
/// yields the same result, and the inputs are never modified.
///
/// # Example
///
/// ```
/// use course_planner::models::{Bucket, ComponentType, Course, DayOfWeek, MeetingComponent, TimeRange};
/// use course_planner::scheduler::GreedyScheduler;
///
/// let courses = vec![Course::new("15-213-A", "15-213").with_component(
///     MeetingComponent::new(ComponentType::Lecture)
///         .with_days([DayOfWeek::Tuesday, DayOfWeek::Thursday])
///         .with_time_range(TimeRange::from_hm(9, 30, 10, 45)),
/// )];
/// let buckets = vec![Bucket::new("b1", "Must take").with_priority(1)];
///
/// let result = GreedyScheduler::new().schedule(&courses, &buckets);
/// assert_eq!(result.scheduled.len(), 1);
/// assert!(result.is_conflict_free());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules a course pool against a bucket list.
    ///
    /// Courses are processed strictly in rank order. A course with even
    /// one colliding component is rejected whole — partial,
    /// component-by-component admission is deliberately not done.
    /// Courses whose every component is unscheduled occupy no time and
    /// are always admitted.
    pub fn schedule(&self, courses: &[Course], buckets: &[Bucket]) -> ScheduleResult {
        let ranked = rank_by_priority(courses, buckets);

        let mut result = ScheduleResult::default();
        let mut occupied: Vec<Occurrence> = Vec::new();

        for course in ranked {
            let hits = find_conflicts(&course, &occupied);
            if hits.is_empty() {
                for component in &course.components {
                    occupied.push(Occurrence::from_component(&course, component));
                }
                result.scheduled.push(course);
            } else {
                result.conflicts.push(CourseConflicts {
                    course: course.clone(),
                    conflicts_with: hits,
                });
                result.rejected.push(course);
            }
        }

        result
    }
}

/// Alternative sections of the same offering.
///
/// Returns every course in `all_courses` sharing `course`'s code but
/// carrying a different id, in input order. Purely a lookup — whether an
/// alternative is itself conflict-free is not checked here.
pub fn suggest_alternatives(course: &Course, all_courses: &[Course]) -> Vec<Course> {
    all_courses
        .iter()
        .filter(|c| c.code == course.code && c.id != course.id)
        .cloned()
        .collect()
}
