//! Employee domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{check_email, check_full_name, check_password};
use crate::errors::{AppError, AppResult};

/// Employee domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub guid: Uuid,
    pub email: String,
    /// Employees created outside the directory may have no password.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub manager_id: i32,
}

impl Employee {
    /// Check whether the given manager owns this record
    pub fn is_owned_by(&self, manager_id: i32) -> bool {
        self.manager_id == manager_id
    }
}

/// Employee creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Employee email address (unique across the whole directory)
    #[schema(example = "jane.doe@example.com")]
    #[serde(default)]
    pub email: String,
    /// Password: 8+ characters with an uppercase letter and a digit
    #[schema(example = "Passw0rd1!", min_length = 8)]
    #[serde(default)]
    pub password: String,
    /// Employee display name
    #[schema(example = "Jane Doe", min_length = 2)]
    #[serde(default)]
    pub full_name: String,
}

impl NewEmployee {
    /// Check every rule in a fixed order and report the first failure.
    pub fn validate(&self) -> AppResult<()> {
        check_email(&self.email)
            .and_then(|_| check_password(&self.password))
            .and_then(|_| check_full_name(&self.full_name))
            .map_err(AppError::bad_request)
    }
}

/// Employee update data transfer object
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub email: String,
    pub full_name: String,
    /// Empty or missing keeps the current password.
    pub password: Option<String>,
}

impl EmployeeChanges {
    /// Password to apply, if a non-empty one was supplied
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Employee response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Numeric employee identifier
    #[schema(example = 1)]
    pub id: i32,
    /// External identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub guid: Uuid,
    /// Employee email address
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    /// Employee display name
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Owning manager
    #[schema(example = 1)]
    pub manager_id: i32,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            guid: employee.guid,
            email: employee.email,
            full_name: employee.full_name,
            created_at: employee.created_at,
            manager_id: employee.manager_id,
        }
    }
}
