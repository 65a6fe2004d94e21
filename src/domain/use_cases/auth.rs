use crate::auth::jwt::JwtService;
use crate::entities::token::{AuthResponse, Claims, LoginRequest};
use crate::errors::AuthError;
use crate::settings::AppConfig;

/// The single configured admin identity. There is no user table: the
/// credential pair is read once at startup and injected here.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        AdminCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both values must match exactly. An empty configured secret never
    /// matches anything (fail closed), and both comparisons are always
    /// evaluated so a bad username and a bad password behave alike.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        if self.username.is_empty() || self.password.is_empty() {
            return false;
        }
        let username_ok = self.username == username;
        let password_ok = self.password == password;
        username_ok && password_ok
    }
}

impl From<&AppConfig> for AdminCredentials {
    fn from(config: &AppConfig) -> Self {
        AdminCredentials::new(&config.admin_username, &config.admin_password)
    }
}

pub struct AuthHandler {
    credentials: AdminCredentials,
    pub token_service: JwtService,
}

impl AuthHandler {
    pub fn new(credentials: AdminCredentials, token_service: JwtService) -> Self {
        AuthHandler {
            credentials,
            token_service,
        }
    }

    /// Exchanges the shared credential pair for a stateless session
    /// token. Every mismatch yields the same generic error.
    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        if !self.credentials.matches(&request.username, &request.password) {
            tracing::warn!("Rejected login attempt");
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.token_service.create_jwt()?;

        tracing::info!("Admin logged in");
        Ok(AuthResponse::new(access_token))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.token_service.decode_jwt(token)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;

    fn test_config() -> AppConfig {
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
            jwt_expiration_minutes: 60,
        }
    }

    fn handler() -> AuthHandler {
        let config = test_config();
        AuthHandler::new(AdminCredentials::from(&config), JwtService::new(&config))
    }

    fn login(username: &str, password: &str) -> Result<AuthResponse, AuthError> {
        handler().login(LoginRequest {
            username: username.into(),
            password: password.into(),
        })
    }

    #[test]
    fn exact_credentials_yield_a_token() {
        let response = login("root", "hunter2").expect("login should succeed");
        assert!(!response.access_token.is_empty());
        assert_eq!(response.token_type, "Bearer");
    }

    #[test]
    fn any_mismatch_yields_the_same_generic_error() {
        for (u, p) in [("root", "wrong"), ("wrong", "hunter2"), ("wrong", "wrong"), ("", "")] {
            assert!(
                matches!(login(u, p), Err(AuthError::WrongCredentials)),
                "({u:?}, {p:?}) must fail generically"
            );
        }
    }

    #[test]
    fn empty_configured_secret_fails_closed() {
        let credentials = AdminCredentials::new("", "");
        assert!(!credentials.matches("", ""));
        assert!(!credentials.matches("root", "hunter2"));
    }

    #[test]
    fn issued_token_verifies() {
        let handler = handler();
        let response = handler
            .login(LoginRequest { username: "root".into(), password: "hunter2".into() })
            .unwrap();

        let claims = handler.verify_token(&response.access_token).unwrap();
        assert!(claims.admin);
    }
}
