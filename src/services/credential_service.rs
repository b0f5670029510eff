//! Credential service - Password hashing and bearer token handling.
//!
//! Pure computations over the inputs plus the configured secret and
//! hashing cost. No repository access.

use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, MSG_UNAUTHORIZED_ACCESS, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Manager, Password};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Manager id, as a decimal string
    pub sub: String,
    pub email: String,
    /// Unique token id
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Parse the subject claim into a manager id.
    pub fn manager_id(&self) -> AppResult<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized(MSG_UNAUTHORIZED_ACCESS))
    }
}

/// Token response returned after registration or login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Credential service trait for dependency injection.
pub trait CredentialService: Send + Sync {
    /// Salted, slow one-way hash of a password
    fn hash_password(&self, plain_text: &str) -> AppResult<String>;

    /// Check a password against a stored hash; any mismatch is `false`
    fn verify_password(&self, plain_text: &str, hash: &str) -> bool;

    /// Issue a signed bearer token for a manager
    fn generate_token(&self, manager: &Manager) -> AppResult<TokenResponse>;

    /// Verify signature, expiry, issuer and audience, returning the claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Argon2 + HS256 implementation of CredentialService.
pub struct Credentials {
    config: Config,
    hasher: Argon2<'static>,
}

impl Credentials {
    /// Build from configuration; fails on invalid hashing cost.
    pub fn new(config: Config) -> AppResult<Self> {
        let hasher = Password::hasher(config.argon2_memory_kib, config.argon2_iterations)?;
        Ok(Self { config, hasher })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.jwt_issuer]);
        validation.set_audience(&[&self.config.jwt_audience]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation
    }
}

impl CredentialService for Credentials {
    fn hash_password(&self, plain_text: &str) -> AppResult<String> {
        Ok(Password::new(plain_text, &self.hasher)?.into_string())
    }

    fn verify_password(&self, plain_text: &str, hash: &str) -> bool {
        Password::from_hash(hash.to_string()).verify(plain_text)
    }

    fn generate_token(&self, manager: &Manager) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: manager.id.to_string(),
            email: manager.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.jwt_issuer.clone(),
            aud: self.config.jwt_audience.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &self.validation(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn test_config() -> Config {
        let mut config = Config::new("sqlite::memory:", SECRET).unwrap();
        config.argon2_memory_kib = 1024;
        config.argon2_iterations = 1;
        config
    }

    fn test_manager() -> Manager {
        Manager {
            id: 42,
            guid: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: String::new(),
            full_name: "Alice Manager".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_hash_and_verify_password() {
        let credentials = Credentials::new(test_config()).unwrap();
        let hash = credentials.hash_password("Passw0rd!").unwrap();

        assert_ne!(hash, "Passw0rd!");
        assert!(credentials.verify_password("Passw0rd!", &hash));
        assert!(!credentials.verify_password("passw0rd!", &hash));
        assert!(!credentials.verify_password("Passw0rd!", "garbage"));
    }

    #[test]
    fn test_token_roundtrip_carries_identity() {
        let credentials = Credentials::new(test_config()).unwrap();
        let response = credentials.generate_token(&test_manager()).unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 24 * 3600);

        let claims = credentials.verify_token(&response.token).unwrap();
        assert_eq!(claims.manager_id().unwrap(), 42);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_jti_is_unique() {
        let credentials = Credentials::new(test_config()).unwrap();
        let manager = test_manager();

        let t1 = credentials.generate_token(&manager).unwrap();
        let t2 = credentials.generate_token(&manager).unwrap();

        let c1 = credentials.verify_token(&t1.token).unwrap();
        let c2 = credentials.verify_token(&t2.token).unwrap();
        assert_ne!(c1.jti, c2.jti);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = Credentials::new(test_config()).unwrap();
        let mut other_config =
            Config::new("sqlite::memory:", "another-secret-key-that-is-32-chars-long").unwrap();
        other_config.argon2_memory_kib = 1024;
        other_config.argon2_iterations = 1;
        let verifier = Credentials::new(other_config).unwrap();

        let token = issuer.generate_token(&test_manager()).unwrap().token;
        assert!(matches!(verifier.verify_token(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let issuer = Credentials::new(test_config()).unwrap();
        let mut config = test_config();
        config.jwt_audience = "someone-else".to_string();
        let verifier = Credentials::new(config).unwrap();

        let token = issuer.generate_token(&test_manager()).unwrap().token;
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let now = Utc::now();
        let claims = Claims {
            sub: "42".to_string(),
            email: "a@x.com".to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(26)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let credentials = Credentials::new(config).unwrap();
        assert!(credentials.verify_token(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject_is_unauthorized() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "a@x.com".to_string(),
            jti: String::new(),
            iss: String::new(),
            aud: String::new(),
            exp: 0,
            iat: 0,
        };
        assert!(matches!(claims.manager_id(), Err(AppError::Unauthorized(_))));
    }
}
