//! Schedule aggregation and reporting.
//!
//! Computes the display-ready views a host renders next to the weekly
//! calendar: the day-bucketed grid, the weekly in-class hour total, and
//! the per-bucket grouping of the full course pool.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Weekly hours | Σ over scheduled occurrences of duration × day count / 60 |
//! | Scheduled credits | Σ credits of admitted courses |
//!
//! Everything here is read-only reporting over one input snapshot; none
//! of it feeds back into admission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{flatten, Bucket, Course, DayOfWeek, Occurrence};
use crate::scheduler::{GreedyScheduler, ScheduleResult};

/// An occurrence placed in the weekly grid, with minute offsets
/// precomputed for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridEntry {
    /// The occurrence shown in this cell.
    pub occurrence: Occurrence,
    /// Start in minutes since midnight.
    pub start_minutes: u16,
    /// End in minutes since midnight.
    pub end_minutes: u16,
}

/// One bucket's courses, independent of admission outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketGroup {
    /// The bucket, or `None` for the synthetic unsorted group.
    pub bucket: Option<Bucket>,
    /// Courses currently assigned to this bucket, in input order.
    pub courses: Vec<Course>,
}

/// Full analysis of one (courses, buckets) snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Admission outcome (scheduled / conflicts / rejected).
    pub result: ScheduleResult,
    /// Weekly grid of the admitted schedule, keyed in canonical day order.
    pub grid: BTreeMap<DayOfWeek, Vec<GridEntry>>,
    /// Total weekly in-class hours of the admitted schedule.
    pub weekly_hours: f64,
    /// Total credits of the admitted schedule.
    pub scheduled_credits: f64,
    /// Full input pool grouped by bucket (buckets in input order, then
    /// the unsorted group).
    pub bucket_groups: Vec<BucketGroup>,
}

/// Buckets each occurrence into every day it recurs on.
///
/// Each entry carries `start_minutes`/`end_minutes`; within a day,
/// entries are sorted ascending by start (stable — ties keep input
/// order). Occurrences with no time range or no days never appear.
/// Days outside `visible_days` are dropped; every visible day gets a
/// key, even when empty.
pub fn build_weekly_grid(
    occurrences: &[Occurrence],
    visible_days: &[DayOfWeek],
) -> BTreeMap<DayOfWeek, Vec<GridEntry>> {
    let mut grid: BTreeMap<DayOfWeek, Vec<GridEntry>> = visible_days
        .iter()
        .map(|&day| (day, Vec::new()))
        .collect();

    for occ in occurrences {
        let Some(range) = occ.time_range else {
            continue;
        };
        for day in &occ.days {
            if let Some(column) = grid.get_mut(day) {
                column.push(GridEntry {
                    occurrence: occ.clone(),
                    start_minutes: range.start.to_minutes(),
                    end_minutes: range.end.to_minutes(),
                });
            }
        }
    }

    for column in grid.values_mut() {
        column.sort_by_key(|e| e.start_minutes);
    }

    grid
}

/// Total weekly in-class hours across scheduled occurrences.
///
/// An occurrence meeting 3 days a week for 75 minutes contributes
/// 3 × 75 / 60 = 3.75 hours. Unscheduled occurrences contribute nothing.
pub fn total_weekly_hours(occurrences: &[Occurrence]) -> f64 {
    occurrences
        .iter()
        .filter_map(|occ| {
            occ.time_range
                .map(|r| r.duration_minutes() as f64 * occ.days.len() as f64)
        })
        .sum::<f64>()
        / 60.0
}

/// Groups the full course pool by bucket.
///
/// One group per bucket in input order (empty buckets included), plus a
/// trailing synthetic group for unsorted courses. Courses referencing a
/// deleted bucket land in the unsorted group — mirroring how they rank.
pub fn group_by_bucket(courses: &[Course], buckets: &[Bucket]) -> Vec<BucketGroup> {
    let mut groups: Vec<BucketGroup> = buckets
        .iter()
        .map(|bucket| BucketGroup {
            bucket: Some(bucket.clone()),
            courses: courses
                .iter()
                .filter(|c| c.bucket_id.as_deref() == Some(bucket.id.as_str()))
                .cloned()
                .collect(),
        })
        .collect();

    let known: Vec<&str> = buckets.iter().map(|b| b.id.as_str()).collect();
    let unsorted: Vec<Course> = courses
        .iter()
        .filter(|c| match c.bucket_id.as_deref() {
            Some(id) => !known.contains(&id),
            None => true,
        })
        .cloned()
        .collect();
    groups.push(BucketGroup {
        bucket: None,
        courses: unsorted,
    });

    groups
}

/// Runs the full pipeline over one snapshot: rank → greedy admission →
/// grid/hour aggregation, plus bucket grouping of the entire input pool.
///
/// The grid defaults to Monday–Friday columns; weekend meetings in the
/// admitted schedule still count toward `weekly_hours`.
pub fn analyze(courses: &[Course], buckets: &[Bucket]) -> AnalysisResult {
    let result = GreedyScheduler::new().schedule(courses, buckets);
    let occurrences = flatten(&result.scheduled);

    let grid = build_weekly_grid(&occurrences, &DayOfWeek::weekdays());
    let weekly_hours = total_weekly_hours(&occurrences);
    let scheduled_credits = result.scheduled_credits();
    let bucket_groups = group_by_bucket(courses, buckets);

    AnalysisResult {
        result,
        grid,
        weekly_hours,
        scheduled_credits,
        bucket_groups,
    }
}
