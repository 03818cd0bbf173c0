//! Course entity operations.

use std::sync::Arc;

use coursemgmt_domain::{self as domain, CourseId};

use crate::infrastructure::ports::{CourseRepo, RepoError};

/// Course entity operations.
pub struct Course {
    repo: Arc<dyn CourseRepo>,
}

impl Course {
    pub fn new(repo: Arc<dyn CourseRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: CourseId) -> Result<Option<domain::Course>, RepoError> {
        self.repo.get(id).await
    }
}
