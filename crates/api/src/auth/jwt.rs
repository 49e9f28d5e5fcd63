//! Session tokens for NarratixAI accounts.
//!
//! A login yields a [`TokenPair`]: an HS256 access JWT scoped to the
//! configured issuer, and an opaque refresh token of which only the SHA-256
//! hash is persisted.

use std::str::FromStr;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use narratix_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Issuer used when `JWT_ISSUER` is unset.
pub const DEFAULT_ISSUER: &str = "narratix-api";

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub username: String,
    pub role: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    fn for_user(user_id: DbId, username: &str, role: &str, config: &JwtConfig) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id,
            username: username.to_string(),
            role: role.to_string(),
            iss: config.issuer.clone(),
            exp: now + config.access_token_ttl_secs(),
            iat: now,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Expected `iss` claim. Tokens from another issuer are rejected.
    pub issuer: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// | Env Var                    | Required | Default        |
    /// |----------------------------|----------|----------------|
    /// | `JWT_SECRET`               | **yes**  | --             |
    /// | `JWT_ISSUER`               | no       | `narratix-api` |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `60`           |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`            |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or a number fails to parse.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            secret,
            issuer: env_or("JWT_ISSUER", DEFAULT_ISSUER.to_string()),
            access_token_expiry_mins: env_or("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS),
            refresh_token_expiry_days: env_or(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            ),
        }
    }

    /// Access token lifetime in seconds.
    pub fn access_token_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    /// When a refresh token issued now stops being accepted.
    pub fn refresh_expires_at(&self) -> Timestamp {
        Utc::now() + chrono::Duration::days(self.refresh_token_expiry_days)
    }
}

fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} is not valid: {e}")),
        Err(_) => default,
    }
}

/// Credentials handed to the client after register, login or refresh.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Stored in the session row; never sent to the client.
    pub refresh_token_hash: String,
    pub expires_in: i64,
}

/// Sign an access token and mint a refresh token for one user.
pub fn issue_token_pair(
    user_id: DbId,
    username: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    let claims = Claims::for_user(user_id, username, role, config);
    let access_token = sign(&claims, config)?;
    let (refresh_token, refresh_token_hash) = generate_refresh_token();

    Ok(TokenPair {
        access_token,
        refresh_token,
        refresh_token_hash,
        expires_in: config.access_token_ttl_secs(),
    })
}

fn sign(claims: &Claims, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature, expiry and issuer, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[config.issuer.as_str()]);
    validation.set_required_spec_claims(&["exp", "iss"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

/// Returns `(plaintext, sha256_hex)`.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_refresh_token(&plaintext);
    (plaintext, hash)
}

pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
