//! Employee service - Manager-scoped employee directory.
//!
//! Every operation takes the caller's manager id and checks ownership
//! before reading or mutating a record.

use async_trait::async_trait;
use std::sync::Arc;

use super::CredentialService;
use crate::config::{
    MSG_EMAIL_ALREADY_EXISTS, MSG_EMPLOYEE_NOT_FOUND, MSG_MANAGER_NOT_FOUND,
    MSG_UNAUTHORIZED_ACCESS,
};
use crate::domain::{Employee, EmployeeChanges, EmployeeResponse, NewEmployee};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Validate and create an employee owned by `manager_id`
    async fn create_employee(
        &self,
        draft: NewEmployee,
        manager_id: i32,
    ) -> AppResult<EmployeeResponse>;

    /// Get one of the manager's employees
    async fn get_employee(&self, id: i32, manager_id: i32) -> AppResult<EmployeeResponse>;

    /// List all employees owned by the manager
    async fn list_by_manager(&self, manager_id: i32) -> AppResult<Vec<EmployeeResponse>>;

    /// Substring search on full name among the manager's employees
    async fn search_employees(
        &self,
        name_part: &str,
        manager_id: i32,
    ) -> AppResult<Vec<EmployeeResponse>>;

    /// Update email, full name and (optionally) password
    async fn update_employee(
        &self,
        id: i32,
        changes: EmployeeChanges,
        manager_id: i32,
    ) -> AppResult<bool>;

    /// Delete one of the manager's employees
    async fn delete_employee(&self, id: i32, manager_id: i32) -> AppResult<bool>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeDirectory<U: UnitOfWork> {
    uow: Arc<U>,
    credentials: Arc<dyn CredentialService>,
}

impl<U: UnitOfWork> EmployeeDirectory<U> {
    /// Create new employee service instance with Unit of Work
    pub fn new(uow: Arc<U>, credentials: Arc<dyn CredentialService>) -> Self {
        Self { uow, credentials }
    }

    /// Load an employee, failing unless `manager_id` owns it.
    async fn owned_employee(&self, id: i32, manager_id: i32) -> AppResult<Employee> {
        let employee = self
            .uow
            .employees()
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_EMPLOYEE_NOT_FOUND)?;

        if !employee.is_owned_by(manager_id) {
            tracing::warn!(
                employee_id = id,
                manager_id,
                "Rejected access to another manager's employee"
            );
            return Err(AppError::unauthorized(MSG_UNAUTHORIZED_ACCESS));
        }

        Ok(employee)
    }

    /// True when some employee other than `except_id` holds the email.
    async fn email_taken(&self, email: &str, except_id: Option<i32>) -> AppResult<bool> {
        let holders = self.uow.employees().find_by_email(email).await?;
        Ok(holders.iter().any(|e| Some(e.id) != except_id))
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeDirectory<U> {
    async fn create_employee(
        &self,
        draft: NewEmployee,
        manager_id: i32,
    ) -> AppResult<EmployeeResponse> {
        tracing::info!(manager_id, "Creating new employee");
        draft.validate()?;

        if self.email_taken(&draft.email, None).await? {
            return Err(AppError::bad_request(MSG_EMAIL_ALREADY_EXISTS));
        }

        self.uow
            .managers()
            .find_by_id(manager_id)
            .await?
            .ok_or_not_found(MSG_MANAGER_NOT_FOUND)?;

        let password_hash = self.credentials.hash_password(&draft.password)?;
        let employee = self
            .uow
            .employees()
            .create(draft.email, Some(password_hash), draft.full_name, manager_id)
            .await?;

        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(EmployeeResponse::from(employee))
    }

    async fn get_employee(&self, id: i32, manager_id: i32) -> AppResult<EmployeeResponse> {
        self.owned_employee(id, manager_id)
            .await
            .map(EmployeeResponse::from)
    }

    async fn list_by_manager(&self, manager_id: i32) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.uow.employees().list_by_manager(manager_id).await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    async fn search_employees(
        &self,
        name_part: &str,
        manager_id: i32,
    ) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self
            .uow
            .employees()
            .search_by_name(manager_id, name_part)
            .await?;

        // The store filters by owner already; never hand out a stray row.
        Ok(employees
            .into_iter()
            .filter(|e| e.is_owned_by(manager_id))
            .map(EmployeeResponse::from)
            .collect())
    }

    async fn update_employee(
        &self,
        id: i32,
        changes: EmployeeChanges,
        manager_id: i32,
    ) -> AppResult<bool> {
        tracing::info!(employee_id = id, "Updating employee");
        let employee = self.owned_employee(id, manager_id).await?;

        if employee.email != changes.email && self.email_taken(&changes.email, Some(id)).await? {
            return Err(AppError::bad_request(MSG_EMAIL_ALREADY_EXISTS));
        }

        let password_hash = changes
            .new_password()
            .map(|p| self.credentials.hash_password(p))
            .transpose()?;

        self.uow
            .employees()
            .update(id, changes.email, changes.full_name, password_hash)
            .await?;

        tracing::info!(employee_id = id, "Employee updated");
        Ok(true)
    }

    async fn delete_employee(&self, id: i32, manager_id: i32) -> AppResult<bool> {
        tracing::info!(employee_id = id, "Deleting employee");
        self.owned_employee(id, manager_id).await?;

        self.uow.employees().delete(id).await?;

        tracing::info!(employee_id = id, "Employee deleted");
        Ok(true)
    }
}
