use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::constants::ADMIN_SUBJECT;
use crate::entities::token::Claims;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

/// Stateless session tokens: any instance holding the signing secret can
/// verify a token without shared storage.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn create_jwt(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.expiration).timestamp() as usize;

        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            admin: true,
            iat: now.timestamp() as usize,
            exp,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{AppConfig, AppEnvironment};

    fn test_config(expiration_minutes: i64) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/test".into(),
            cors_allowed_origins: vec!["*".into()],
            admin_username: "root".into(),
            admin_password: "hunter2".into(),
            jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512".into(),
            jwt_expiration_minutes: expiration_minutes,
        }
    }

    #[test]
    fn minted_token_round_trips() {
        let service = JwtService::new(&test_config(60));
        let token = service.create_jwt().expect("Failed to create JWT");

        let decoded = service.decode_jwt(&token).expect("Failed to decode JWT");
        assert_eq!(decoded.claims.sub, ADMIN_SUBJECT);
        assert!(decoded.claims.admin);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtService::new(&test_config(-5));
        let token = service.create_jwt().expect("Failed to create JWT");

        assert!(matches!(
            service.decode_jwt(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let service = JwtService::new(&test_config(60));
        let mut other_config = test_config(60);
        other_config.jwt_secret = "a_completely_different_secret_of_enough_length".into();
        let other = JwtService::new(&other_config);

        let token = other.create_jwt().expect("Failed to create JWT");
        assert!(matches!(
            service.decode_jwt(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = JwtService::new(&test_config(60));
        assert!(service.decode_jwt("not-a-jwt").is_err());
    }
}
