//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{
    AuthService, CredentialService, EmployeeService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Manager registration and login
    pub auth_service: Arc<dyn AuthService>,
    /// Manager-scoped employee directory
    pub employee_service: Arc<dyn EmployeeService>,
    /// Token verification for the auth middleware
    pub credentials: Arc<dyn CredentialService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Front-end origins allowed by CORS
    pub allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> AppResult<Self> {
        let allowed_origins = Arc::new(config.cors_allowed_origins.clone());
        let container = Services::from_connection(database.get_connection(), config)?;

        Ok(Self::new(
            container.auth(),
            container.employees(),
            container.credentials(),
            database,
            allowed_origins,
        ))
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        credentials: Arc<dyn CredentialService>,
        database: Arc<Database>,
        allowed_origins: Arc<Vec<String>>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            credentials,
            database,
            allowed_origins,
        }
    }
}
