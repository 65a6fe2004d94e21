use std::sync::Arc;

use sqlx::PgPool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, db, encoder, utils};

use auth::jwt::JwtService;
use encoder::data_url::ImageEncoder;
use repositories::project::ProjectRepository;
use repositories::skill::SkillRepository;
use repositories::sqlx_repo::{SqlxProjectRepo, SqlxSkillRepo};
use use_cases::auth::{AdminCredentials, AuthHandler};
use use_cases::projects::ProjectHandler;
use use_cases::skills::SkillHandler;

pub struct AppState {
    pub auth_handler: AuthHandler,
    pub project_handler: ProjectHandler,
    pub skill_handler: SkillHandler,
    pub encoder: ImageEncoder,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: PgPool) -> Self {
        Self::with_repos(
            config,
            Arc::new(SqlxProjectRepo::new(pool.clone())),
            Arc::new(SqlxSkillRepo::new(pool)),
        )
    }

    /// Wires the state over arbitrary repository implementations; tests
    /// inject in-memory stores here.
    pub fn with_repos(
        config: &settings::AppConfig,
        project_repo: Arc<dyn ProjectRepository>,
        skill_repo: Arc<dyn SkillRepository>,
    ) -> Self {
        let jwt_service = JwtService::new(config);
        let auth_handler = AuthHandler::new(AdminCredentials::from(config), jwt_service);

        AppState {
            auth_handler,
            project_handler: ProjectHandler::new(project_repo),
            skill_handler: SkillHandler::new(skill_repo),
            encoder: ImageEncoder::new(),
        }
    }
}
