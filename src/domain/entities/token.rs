use serde::{Serialize, Deserialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
}

impl AuthResponse {
    pub fn new(access_token: String) -> Self {
        AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Claims for the single fixed admin principal. There is no user table;
/// `sub` is a constant and `admin` is always true on minted tokens. The
/// flag is still carried so a future multi-admin layer has a seam.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub admin: bool,
    pub iat: usize,
    pub exp: usize,
}
