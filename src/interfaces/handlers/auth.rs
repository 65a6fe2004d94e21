use actix_web::{post, web, HttpResponse, Responder};

use crate::entities::token::LoginRequest;
use crate::AppState;

/// Exchanges `{username, password}` for a session token. Failures are a
/// single generic 401 regardless of which field mismatched.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(credentials.into_inner()) {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => actix_web::ResponseError::error_response(&e),
    }
}
