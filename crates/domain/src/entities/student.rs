//! Student entity - A person who can sign up for courses
//!
//! Students are provisioned outside this system; here they are read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::StudentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub email: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Student {
    pub fn new(id: StudentId, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: email.into(),
            create_time: now,
            update_time: now,
        }
    }
}
