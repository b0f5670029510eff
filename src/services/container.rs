//! Service Container - Centralized service access.
//!
//! Wires the Unit of Work and the credential service into every use case
//! once, so handlers only ever see trait objects.

use std::sync::Arc;

use super::{AuthService, CredentialService, EmployeeService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get employee directory service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get credential service (token verification for middleware)
    fn credentials(&self) -> Arc<dyn CredentialService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    employee_service: Arc<dyn EmployeeService>,
    credential_service: Arc<dyn CredentialService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        employee_service: Arc<dyn EmployeeService>,
        credential_service: Arc<dyn CredentialService>,
    ) -> Self {
        Self {
            auth_service,
            employee_service,
            credential_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> AppResult<Self> {
        use super::{Authenticator, Credentials, EmployeeDirectory};

        let uow = Arc::new(Persistence::new(db));
        let credentials: Arc<dyn CredentialService> = Arc::new(Credentials::new(config)?);

        Ok(Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), credentials.clone())),
            employee_service: Arc::new(EmployeeDirectory::new(uow, credentials.clone())),
            credential_service: credentials,
        })
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn credentials(&self) -> Arc<dyn CredentialService> {
        self.credential_service.clone()
    }
}
