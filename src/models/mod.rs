//! Course scheduling domain models.
//!
//! Provides the core data types for representing a student's candidate
//! course pool and its derived weekly schedule: wall-clock times, weekly
//! meeting patterns, courses, priority buckets, and the flattened
//! occurrences the conflict detector works on.
//!
//! Courses and buckets are owned by the host's persistent store; the
//! scheduling core treats them as read-only snapshots and only ever
//! produces new derived values.

mod bucket;
mod course;
mod meeting;
mod occurrence;
mod time;

pub use bucket::Bucket;
pub use course::Course;
pub use meeting::{ComponentType, MeetingComponent};
pub use occurrence::{flatten, Occurrence};
pub use time::{days_intersect, ClockTime, DayOfWeek, TimeRange};
