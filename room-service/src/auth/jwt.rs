//! JWT token service
//!
//! Issues and verifies the stateless session tokens of both principals.
//! The key and algorithm come from [`JwtConfig`], loaded once at startup.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret
    pub secret: String,
    /// HS256 | HS384 | HS512
    pub algorithm: Algorithm,
    /// Token lifetime (minutes)
    pub expiration_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "dev-SECRET_KEY-not-for-production".to_string(),
            algorithm: Algorithm::HS256,
            expiration_minutes: 720,
        }
    }
}

/// Which principal a token was issued to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "habitacion")]
    Room,
    #[serde(rename = "admin")]
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "habitacion",
            Self::Admin => "admin",
        }
    }
}

/// Claims stored in the token
///
/// Room tokens carry the room number in `sub` plus `habitacion_id`;
/// admin tokens carry the username in `sub`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitacion_id: Option<i64>,
    pub user_type: UserType,
    /// Expiration timestamp (seconds)
    pub exp: i64,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &self.config.algorithm)
            .field("expiration_minutes", &self.config.expiration_minutes)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign a token with `exp = now + ttl`
    pub fn issue(
        &self,
        sub: &str,
        habitacion_id: Option<i64>,
        user_type: UserType,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            habitacion_id,
            user_type,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Room session token with the configured lifetime
    pub fn generate_room_token(&self, room_id: i64, number: &str) -> Result<String, JwtError> {
        self.issue(number, Some(room_id), UserType::Room, self.default_ttl())
    }

    /// Admin session token with the configured lifetime
    pub fn generate_admin_token(&self, username: &str) -> Result<String, JwtError> {
        self.issue(username, None, UserType::Admin, self.default_ttl())
    }

    fn default_ttl(&self) -> Duration {
        Duration::minutes(self.config.expiration_minutes)
    }

    /// Verify signature and expiry, then decode the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
