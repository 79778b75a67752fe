//! Usage counts for a single time bucket.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Counts recorded for one application over one interval.
///
/// The interval is a discrete time-bucket index; the rate-limiting
/// layer decides its width and epoch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntervalCount {
    /// The application the counts are scoped to.
    pub application_id: Option<Uuid>,
    /// Raw count accumulated during the interval.
    pub count: i32,
    /// Count after decrements have been applied.
    pub decremented_count: i32,
    /// Index of the time bucket the counts belong to.
    pub interval: i32,
}

impl IntervalCount {
    /// Creates a fully-formed count for one bucket.
    pub fn new(
        application_id: Option<Uuid>,
        count: i32,
        decremented_count: i32,
        interval: i32,
    ) -> Self {
        Self {
            application_id,
            count,
            decremented_count,
            interval,
        }
    }
}

impl fmt::Display for IntervalCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json =
            serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of(value: &IntervalCount) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_and_hash() {
        let id = Uuid::new_v4();
        let a = IntervalCount::new(Some(id), 10, 8, 42);
        let b = IntervalCount::new(Some(id), 10, 8, 42);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let mut c = b.clone();
        c.decremented_count = 7;
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialized_shape() {
        let count = IntervalCount::new(None, 1, 1, 0);
        let json = serde_json::to_value(&count).unwrap();
        assert!(json.get("decrementedCount").is_some());
        assert!(json.get("applicationId").is_some());
    }

    #[test]
    fn test_display_is_json() {
        let count = IntervalCount::new(Some(Uuid::new_v4()), 3, 2, 1);
        let parsed: IntervalCount =
            serde_json::from_str(&count.to_string()).unwrap();
        assert_eq!(parsed, count);
    }
}
