//! Course entity - Something a student can enroll in

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CourseId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            create_time: now,
            update_time: now,
        }
    }
}
