use std::sync::Arc;

use validator::Validate;

use crate::entities::skill::{Skill, SkillPayload};
use crate::errors::AppError;
use crate::repositories::skill::SkillRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct SkillHandler {
    pub skill_repo: Arc<dyn SkillRepository>,
}

impl SkillHandler {
    pub fn new(skill_repo: Arc<dyn SkillRepository>) -> Self {
        SkillHandler { skill_repo }
    }

    /// Alphabetical by category, then by name. Public.
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    pub async fn create_skill(&self, payload: SkillPayload) -> Result<Skill, AppError> {
        payload.validate()?;
        self.skill_repo.create_skill(&payload).await
    }

    pub async fn update_skill(&self, id: &str, payload: SkillPayload) -> Result<Skill, AppError> {
        payload.validate()?;
        let id = valid_uuid(id)?;
        self.skill_repo.update_skill(&id, &payload).await
    }

    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let id = valid_uuid(id)?;
        self.skill_repo.delete_skill(&id).await
    }
}
