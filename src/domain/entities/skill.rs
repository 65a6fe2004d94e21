use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A skill shown on the portfolio. `category` is free text on purpose:
/// the admin UI suggests Frontend/Backend/Tools/Other but the store
/// accepts any label, so this is not modeled as an enum.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// 0-100 when present.
    pub proficiency: Option<i16>,
    /// Remote URL or inline `data:` image.
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a skill, submitted wholesale for create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillPayload {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,

    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: Option<i16>,

    pub icon: Option<String>,
}
