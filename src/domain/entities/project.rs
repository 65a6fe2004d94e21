use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Live deployment link.
    pub url: String,
    /// Source repository link, if public.
    pub github: Option<String>,
    /// Remote URL or inline `data:` image.
    pub image: String,
    /// Display order matters; duplicates are allowed.
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a project. The same shape is submitted for create
/// and update: an update replaces every editable field with whatever the
/// client currently holds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectPayload {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,

    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub url: String,

    pub github: Option<String>,

    #[validate(length(min = 1, message = "Image cannot be empty"))]
    pub image: String,

    #[serde(default)]
    pub technologies: Vec<String>,
}
