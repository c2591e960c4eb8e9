use super::config::JwtConfig;
use crate::errors::AppError;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Roles understood by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User id
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl JwtClaims {
    pub fn has_role(&self, role: Role) -> bool {
        let wanted = role.to_string();
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(&wanted))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No bearer token provided")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Token subject is not a user id")]
    InvalidSubject,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Unauthorized(match err {
            AuthError::MissingToken => "Bạn cần đăng nhập để tiếp tục".to_string(),
            AuthError::InvalidToken(_) | AuthError::InvalidSubject => {
                "Token không hợp lệ hoặc đã hết hạn".to_string()
            }
        })
    }
}

/// HS256 verifier. Tokens are issued by the identity service; signing is
/// only compiled for tests (`test-tokens` feature).
#[derive(Clone)]
pub struct JwtAuth {
    #[cfg(any(test, feature = "test-tokens"))]
    encoding: jsonwebtoken::EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    #[cfg(any(test, feature = "test-tokens"))]
    ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_secs = config.ttl_secs, "JWT auth initialized");
        Self {
            #[cfg(any(test, feature = "test-tokens"))]
            encoding: jsonwebtoken::EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            #[cfg(any(test, feature = "test-tokens"))]
            ttl_secs: config.ttl_secs,
        }
    }

    /// Signs a token for `user_id`. Test helper for exercising protected routes.
    #[cfg(any(test, feature = "test-tokens"))]
    pub fn create_token(&self, user_id: Uuid, roles: &[Role]) -> Result<String, AuthError> {
        use chrono::{Duration, Utc};
        use jsonwebtoken::{Header, encode};

        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            email: None,
            roles: roles.iter().map(Role::to_string).collect(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Checks signature and expiry.
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, AuthError> {
        Ok(decode::<JwtClaims>(token, &self.decoding, &self.validation)?.claims)
    }
}
