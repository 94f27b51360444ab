//! Conflict detection, priority ranking, and greedy admission.
//!
//! # Algorithm
//!
//! `GreedyScheduler` admits courses first-come-first-served in bucket
//! priority order. It is deliberately not an optimizer: no backtracking,
//! no alternative-section substitution, no maximum-credit search. The
//! policy is predictable — higher-priority buckets always win — and
//! that predictability is the point.
//!
//! # Conflict Model
//!
//! Two occurrences collide when they share a recurrence day and their
//! half-open daily time ranges overlap. Unscheduled (TBA) meetings
//! never collide with anything.

mod conflict;
mod greedy;
mod ranking;

pub use conflict::{find_conflicts, occurrences_conflict, ConflictDetail};
pub use greedy::{suggest_alternatives, CourseConflicts, GreedyScheduler, ScheduleResult};
pub use ranking::{rank_by_priority, resolve_priority, UNSORTED_PRIORITY};
