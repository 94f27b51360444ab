//! Priority bucket model.
//!
//! A bucket is a user-defined priority category that courses are
//! assigned to ("must take", "backup", ...). Buckets are created,
//! renamed, recolored, and deleted by the host; the scheduling core
//! only reads the `id → priority` mapping.
//!
//! # Priority Convention
//! Lower numeric `priority` = preferred = scheduled earlier. Courses
//! with no bucket (or a dangling bucket reference) resolve to
//! [`crate::scheduler::UNSORTED_PRIORITY`] and are scheduled last.

use serde::{Deserialize, Serialize};

/// A user-defined priority category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bucket {
    /// Unique bucket identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color ("#RRGGBB").
    pub color_hex: String,
    /// Scheduling priority (lower = scheduled earlier).
    pub priority: i32,
    /// When the bucket was created (epoch ms).
    pub created_at_ms: i64,
}

impl Bucket {
    /// Creates a new bucket.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color_hex: String::new(),
            priority: 0,
            created_at_ms: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = color_hex.into();
        self
    }

    /// Sets the created-at timestamp (epoch ms).
    pub fn with_created_at(mut self, created_at_ms: i64) -> Self {
        self.created_at_ms = created_at_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_builder() {
        let b = Bucket::new("b1", "Must take")
            .with_priority(1)
            .with_color("#e74c3c")
            .with_created_at(1_700_000_000_000);

        assert_eq!(b.id, "b1");
        assert_eq!(b.name, "Must take");
        assert_eq!(b.priority, 1);
        assert_eq!(b.color_hex, "#e74c3c");
    }
}
