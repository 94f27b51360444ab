//! Conflict detection between weekly occurrences.
//!
//! Two occurrences conflict when they share at least one recurrence day
//! AND their daily time ranges overlap. The overlap test is strict
//! half-open, so a meeting ending at 10:45 never conflicts with one
//! starting at 10:45 — back-to-back classes are legal.
//!
//! A course never conflicts with its own occurrences: a lecture and its
//! recitation belong to the same course and are not flagged against each
//! other, whatever their times.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{days_intersect, ComponentType, Course, DayOfWeek, Occurrence, TimeRange};

/// One colliding pair found while checking a candidate course.
///
/// Records the candidate component involved, the already-admitted
/// occurrence it collides with, and the exact days and time span they
/// share (what a host renders as "conflicts with 15-213 Tue 10:00–10:45").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConflictDetail {
    /// Kind of candidate component that collided.
    pub component_type: ComponentType,
    /// The existing occurrence the candidate collides with.
    pub with: Occurrence,
    /// Days both occurrences recur on.
    pub shared_days: BTreeSet<DayOfWeek>,
    /// The overlapping daily time span.
    pub overlap: TimeRange,
}

/// Whether two occurrences collide.
///
/// Unscheduled occurrences (no days or no time range) never conflict.
pub fn occurrences_conflict(a: &Occurrence, b: &Occurrence) -> bool {
    let (Some(ra), Some(rb)) = (a.time_range, b.time_range) else {
        return false;
    };
    days_intersect(&a.days, &b.days) && ra.overlaps(&rb)
}

/// Finds every collision between a candidate course and a set of
/// existing occurrences.
///
/// Iterates candidate components (outer) against existing occurrences
/// (inner), preserving discovery order, and skips occurrences belonging
/// to the candidate itself. Returns one detail per colliding pair.
pub fn find_conflicts(candidate: &Course, existing: &[Occurrence]) -> Vec<ConflictDetail> {
    let mut details = Vec::new();

    for component in candidate.schedulable_components() {
        let occ = Occurrence::from_component(candidate, component);
        for other in existing {
            if other.course_id == candidate.id {
                continue;
            }
            if !occurrences_conflict(&occ, other) {
                continue;
            }
            // occurrences_conflict guarantees both ranges exist and intersect
            let (Some(ra), Some(rb)) = (occ.time_range, other.time_range) else {
                continue;
            };
            let Some(overlap) = ra.intersection(&rb) else {
                continue;
            };
            details.push(ConflictDetail {
                component_type: component.component_type,
                with: other.clone(),
                shared_days: occ.days.intersection(&other.days).copied().collect(),
                overlap,
            });
        }
    }

    details
}
