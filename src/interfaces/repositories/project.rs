use async_trait::async_trait;
use uuid::Uuid;
use sqlx::PgPool;

use crate::{
    entities::project::{Project, ProjectPayload},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, AppError>;
    async fn update_project(&self, id: &Uuid, payload: &ProjectPayload) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, url, github, image, technologies)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.url)
        .bind(&payload.github)
        .bind(&payload.image)
        .bind(&payload.technologies)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update_project(&self, id: &Uuid, payload: &ProjectPayload) -> Result<Project, AppError> {
        // Wholesale replacement of the editable fields; no COALESCE,
        // the submitted payload is the new truth.
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = $1,
                description = $2,
                url = $3,
                github = $4,
                image = $5,
                technologies = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.url)
        .bind(&payload.github)
        .bind(&payload.image)
        .bind(&payload.technologies)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        Ok(updated)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        // Deleting an absent id is a no-op, not an error.
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
