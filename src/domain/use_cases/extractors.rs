use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::token::Claims, errors::AuthError, AppState};

/// Extractor gating mutating handlers on a valid admin session token.
///
/// A request without a token fails exactly like one with an invalid
/// token (401). Usage: add `claims: AdminClaims` as a handler parameter.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState missing in request extensions");
                return ready(Err(AuthError::MissingJwtService.into()));
            }
        };

        let token = match extract_bearer_token(req) {
            Some(token) => token,
            None => return ready(Err(AuthError::MissingCredentials.into())),
        };

        match state.auth_handler.verify_token(&token) {
            Ok(claims) if claims.admin => ready(Ok(AdminClaims(claims))),
            Ok(_) => ready(Err(AuthError::Forbidden.into())),
            Err(e) => ready(Err(e.into())),
        }
    }
}

fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
