//! Student entity operations.

use std::sync::Arc;

use coursemgmt_domain::{self as domain, StudentId};

use crate::infrastructure::ports::{RepoError, StudentRepo};

/// Student entity operations.
pub struct Student {
    repo: Arc<dyn StudentRepo>,
}

impl Student {
    pub fn new(repo: Arc<dyn StudentRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: StudentId) -> Result<Option<domain::Student>, RepoError> {
        self.repo.get(id).await
    }
}
