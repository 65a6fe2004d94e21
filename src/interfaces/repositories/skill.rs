use async_trait::async_trait;
use uuid::Uuid;
use sqlx::PgPool;

use crate::{
    entities::skill::{Skill, SkillPayload},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, payload: &SkillPayload) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: &Uuid, payload: &SkillPayload) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills ORDER BY category ASC, name ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn create_skill(&self, payload: &SkillPayload) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, proficiency, icon)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(&payload.name)
        .bind(&payload.category)
        .bind(payload.proficiency)
        .bind(&payload.icon)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill)
    }

    async fn update_skill(&self, id: &Uuid, payload: &SkillPayload) -> Result<Skill, AppError> {
        let updated = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET
                name = $1,
                category = $2,
                proficiency = $3,
                icon = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#
        )
        .bind(&payload.name)
        .bind(&payload.category)
        .bind(payload.proficiency)
        .bind(&payload.icon)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

        Ok(updated)
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
