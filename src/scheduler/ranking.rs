//! Priority ranking of the course pool.
//!
//! Orders courses by the priority of their assigned bucket, ascending
//! (lower priority value = preferred = scheduled earlier). Unsorted
//! courses and courses referencing a deleted bucket fall to the
//! [`UNSORTED_PRIORITY`] sentinel and are scheduled last.
//!
//! # Stability
//! The sort is stable: courses sharing a bucket keep their relative
//! order from the input snapshot, which reflects addition order. The
//! greedy scheduler depends on this for predictable tie-breaking.

use std::collections::HashMap;

use crate::models::{Bucket, Course};

/// Priority assigned to unsorted courses and dangling bucket
/// references. Scheduled after every real bucket.
pub const UNSORTED_PRIORITY: i32 = 999;

/// Resolves a course's effective priority against a bucket lookup.
pub fn resolve_priority(course: &Course, priorities: &HashMap<&str, i32>) -> i32 {
    course
        .bucket_id
        .as_deref()
        .and_then(|id| priorities.get(id).copied())
        .unwrap_or(UNSORTED_PRIORITY)
}

/// Returns a new list of courses sorted ascending by bucket priority.
///
/// The input snapshot is not modified. An empty bucket list degrades to
/// pure insertion order (every course resolves to the sentinel).
pub fn rank_by_priority(courses: &[Course], buckets: &[Bucket]) -> Vec<Course> {
    let priorities: HashMap<&str, i32> = buckets
        .iter()
        .map(|b| (b.id.as_str(), b.priority))
        .collect();

    let mut ranked: Vec<Course> = courses.to_vec();
    ranked.sort_by_key(|c| resolve_priority(c, &priorities));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_in(id: &str, bucket: Option<&str>) -> Course {
        let c = Course::new(id, id);
        match bucket {
            Some(b) => c.with_bucket(b),
            None => c,
        }
    }

    fn bucket(id: &str, priority: i32) -> Bucket {
        Bucket::new(id, id).with_priority(priority)
    }

    #[test]
    fn test_rank_ascending_by_bucket_priority() {
        let courses = vec![
            course_in("backup", Some("b3")),
            course_in("must", Some("b1")),
            course_in("maybe", Some("b2")),
        ];
        let buckets = vec![bucket("b1", 1), bucket("b2", 2), bucket("b3", 3)];

        let ranked = rank_by_priority(&courses, &buckets);
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["must", "maybe", "backup"]);
    }

    #[test]
    fn test_stable_within_bucket() {
        let courses = vec![
            course_in("first", Some("b1")),
            course_in("second", Some("b1")),
            course_in("third", Some("b1")),
        ];
        let buckets = vec![bucket("b1", 1)];

        let ranked = rank_by_priority(&courses, &buckets);
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_unsorted_scheduled_last() {
        let courses = vec![course_in("unsorted", None), course_in("must", Some("b1"))];
        let buckets = vec![bucket("b1", 1)];

        let ranked = rank_by_priority(&courses, &buckets);
        assert_eq!(ranked[0].id, "must");
        assert_eq!(ranked[1].id, "unsorted");
    }

    #[test]
    fn test_dangling_bucket_reference_falls_to_sentinel() {
        let courses = vec![
            course_in("dangling", Some("deleted")),
            course_in("must", Some("b1")),
        ];
        let buckets = vec![bucket("b1", 1)];

        let ranked = rank_by_priority(&courses, &buckets);
        assert_eq!(ranked[0].id, "must");
        assert_eq!(ranked[1].id, "dangling");

        let priorities: HashMap<&str, i32> =
            buckets.iter().map(|b| (b.id.as_str(), b.priority)).collect();
        assert_eq!(resolve_priority(&courses[0], &priorities), UNSORTED_PRIORITY);
    }

    #[test]
    fn test_empty_bucket_list_keeps_insertion_order() {
        let courses = vec![
            course_in("a", Some("b1")),
            course_in("b", None),
            course_in("c", Some("b2")),
        ];

        let ranked = rank_by_priority(&courses, &[]);
        let ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let courses = vec![course_in("z", Some("b2")), course_in("a", Some("b1"))];
        let buckets = vec![bucket("b1", 1), bucket("b2", 2)];

        let _ = rank_by_priority(&courses, &buckets);
        assert_eq!(courses[0].id, "z"); // original order intact
    }
}
