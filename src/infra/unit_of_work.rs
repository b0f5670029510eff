//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories so services depend on a single
//! abstraction instead of individual stores.
//!
//! Every repository call runs as its own statement against the pool; there
//! is no transaction spanning a uniqueness check and the write that follows.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{EmployeeRepository, EmployeeStore, ManagerRepository, ManagerStore};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get manager repository
    fn managers(&self) -> Arc<dyn ManagerRepository>;

    /// Get employee repository
    fn employees(&self) -> Arc<dyn EmployeeRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    manager_repo: Arc<ManagerStore>,
    employee_repo: Arc<EmployeeStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            manager_repo: Arc::new(ManagerStore::new(db.clone())),
            employee_repo: Arc::new(EmployeeStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn managers(&self) -> Arc<dyn ManagerRepository> {
        self.manager_repo.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repo.clone()
    }
}
