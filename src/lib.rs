//! Course timetable scheduling core.
//!
//! Organizes a student's candidate courses (captured from a registration
//! portal) into a conflict-free weekly schedule. This crate is the pure
//! scheduling core: scraping, persistence, and rendering are host
//! concerns — the core consumes read-only (courses, buckets) snapshots
//! and produces new derived result values, with no I/O and no shared
//! mutable state.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClockTime`, `TimeRange`, `DayOfWeek`,
//!   `MeetingComponent`, `Course`, `Bucket`, `Occurrence`
//! - **`scheduler`**: Conflict detection, priority ranking, and the
//!   greedy admission loop producing a `ScheduleResult`
//! - **`analysis`**: Weekly grid, hour totals, bucket grouping, and the
//!   composed `analyze` entry point
//! - **`validation`**: Snapshot integrity checks (duplicate IDs, empty
//!   courses, malformed time ranges) for the capture boundary
//!
//! # Determinism
//!
//! Every operation is a deterministic function of its input snapshot.
//! Hosts re-run the whole computation on any change rather than patch a
//! previous result; a stale result can simply be discarded.

pub mod analysis;
pub mod models;
pub mod scheduler;
pub mod validation;
