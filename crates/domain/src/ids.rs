use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned integer identifiers.
///
/// Rows are keyed by auto-increment integers, so every ID wraps an `i64`
/// and serializes as a bare number.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }

            /// Zero is never assigned by the store; clients send it for "missing".
            pub const fn is_unset(self) -> bool {
                self.0 == 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(StudentId);
define_id!(CourseId);
define_id!(EnrollmentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&StudentId::new(42)).expect("serialize");
        assert_eq!(json, "42");

        let id: CourseId = serde_json::from_str("101").expect("deserialize");
        assert_eq!(id, CourseId::new(101));
    }

    #[test]
    fn zero_is_unset() {
        assert!(StudentId::new(0).is_unset());
        assert!(!StudentId::new(7).is_unset());
    }
}
