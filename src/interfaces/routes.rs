use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod auth;
mod images;
mod json_error;
mod projects;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .service(health_check)
            .configure(auth::config_routes)
            .configure(projects::config_routes)
            .configure(skills::config_routes)
            .configure(images::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
