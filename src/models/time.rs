//! Wall-clock time and weekly day models.
//!
//! Defines the time primitives for recurring weekly meetings: a
//! wall-clock time of day, a half-open daily time range, and a
//! Monday-first weekday enumeration.
//!
//! # Time Model
//! All interval arithmetic is done in minutes since midnight (0–1439).
//! Meetings recur perpetually within a single week — there is no date,
//! timezone, or semester-boundary reasoning at this layer, and ranges
//! never cross midnight.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A wall-clock time of day.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Hour of day (0–23).
    pub hours: u8,
    /// Minute of hour (0–59).
    pub minutes: u8,
}

impl ClockTime {
    /// Creates a new clock time. Inputs are assumed pre-validated
    /// (see [`crate::validation`] for the boundary check).
    pub fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    /// Minutes since midnight (0–1439).
    #[inline]
    pub fn to_minutes(self) -> u16 {
        self.hours as u16 * 60 + self.minutes as u16
    }
}

/// A daily time interval [start, end).
///
/// Half-open: includes start, excludes end, so back-to-back meetings
/// that touch at a boundary do not overlap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive). Conceptually `start < end`.
    pub end: ClockTime,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Convenience constructor from hour/minute pairs.
    pub fn from_hm(start_h: u8, start_m: u8, end_h: u8, end_m: u8) -> Self {
        Self::new(ClockTime::new(start_h, start_m), ClockTime::new(end_h, end_m))
    }

    /// Duration of this range in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.to_minutes().saturating_sub(self.start.to_minutes())
    }

    /// Whether two ranges overlap (strict half-open test).
    ///
    /// A range ending exactly when another starts does not overlap it.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start.to_minutes() < other.end.to_minutes()
            && other.start.to_minutes() < self.end.to_minutes()
    }

    /// The overlapping span of two ranges, if any.
    pub fn intersection(&self, other: &Self) -> Option<TimeRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start.to_minutes() < end.to_minutes() {
            Some(TimeRange::new(start, end))
        } else {
            None
        }
    }
}

/// Day of the week, Monday-first.
///
/// The derived `Ord` is the canonical sort and display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days in canonical order.
    pub fn all() -> [DayOfWeek; 7] {
        [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ]
    }

    /// Monday through Friday — the default weekly-grid columns.
    pub fn weekdays() -> [DayOfWeek; 5] {
        [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
        ]
    }

    /// Short display label (e.g., "Mon").
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

/// Whether two day sets share at least one day.
///
/// Empty sets (unscheduled meetings) never intersect anything.
pub fn days_intersect(a: &BTreeSet<DayOfWeek>, b: &BTreeSet<DayOfWeek>) -> bool {
    a.iter().any(|d| b.contains(d))
}
