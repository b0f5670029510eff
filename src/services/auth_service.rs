//! Authentication service - Manager registration and login.
//!
//! Password hashing and token issuance are delegated to the credential
//! service; managers are reached through the Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use super::{CredentialService, TokenResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new manager and return a token for it
    async fn register(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> AppResult<TokenResponse>;

    /// Login and return a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    credentials: Arc<dyn CredentialService>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, credentials: Arc<dyn CredentialService>) -> Self {
        Self { uow, credentials }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        email: String,
        password: String,
        full_name: String,
    ) -> AppResult<TokenResponse> {
        if !self.uow.managers().find_by_email(&email).await?.is_empty() {
            return Err(AppError::AlreadyExists);
        }

        let password_hash = self.credentials.hash_password(&password)?;
        let manager = self
            .uow
            .managers()
            .create(email, password_hash, full_name)
            .await?;

        tracing::info!(manager_id = manager.id, "Manager registered");
        self.credentials.generate_token(&manager)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let candidates = self.uow.managers().find_by_email(&email).await?;

        let manager = candidates
            .iter()
            .find(|m| self.credentials.verify_password(&password, &m.password_hash))
            .ok_or_else(|| {
                tracing::debug!("Login rejected");
                AppError::InvalidCredentials
            })?;

        self.credentials.generate_token(manager)
    }
}
