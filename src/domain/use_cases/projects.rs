use std::sync::Arc;

use validator::Validate;

use crate::entities::project::{Project, ProjectPayload};
use crate::errors::AppError;
use crate::repositories::project::ProjectRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    /// Newest-first list, public.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Validates the payload before the store is touched; an invalid
    /// payload never produces a partial record.
    pub async fn create_project(&self, payload: ProjectPayload) -> Result<Project, AppError> {
        payload.validate()?;
        self.project_repo.create_project(&payload).await
    }

    /// Wholesale replacement of the editable fields, last write wins.
    pub async fn update_project(&self, id: &str, payload: ProjectPayload) -> Result<Project, AppError> {
        payload.validate()?;
        let id = valid_uuid(id)?;
        self.project_repo.update_project(&id, &payload).await
    }

    /// Idempotent: deleting an absent id is not an error.
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let id = valid_uuid(id)?;
        self.project_repo.delete_project(&id).await
    }
}
