//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::config::MSG_EMPLOYEE_NOT_FOUND;
use crate::domain::Employee;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Lookups by id and email are not scoped to a manager; ownership is
/// enforced by the directory service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// Find every employee holding an exact (case-sensitive) email, across all managers
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Employee>>;

    /// List a manager's employees ordered by ID
    async fn list_by_manager(&self, manager_id: i32) -> AppResult<Vec<Employee>>;

    /// Literal, case-sensitive substring match on full name among one manager's employees
    async fn search_by_name(&self, manager_id: i32, name_part: &str) -> AppResult<Vec<Employee>>;

    /// Create a new employee
    async fn create(
        &self,
        email: String,
        password_hash: Option<String>,
        full_name: String,
        manager_id: i32,
    ) -> AppResult<Employee>;

    /// Overwrite email and full name; replace the password hash only when given
    async fn update(
        &self,
        id: i32,
        email: String,
        full_name: String,
        password_hash: Option<String>,
    ) -> AppResult<Employee>;

    /// Delete employee by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 1-based position of `needle` in the full name, 0 when absent.
    ///
    /// Literal and case-sensitive on every backend: no `LIKE` wildcards.
    fn position_of(&self, needle: &str) -> sea_orm::sea_query::FunctionCall {
        let function = match self.db.get_database_backend() {
            DbBackend::Postgres => "strpos",
            _ => "instr",
        };

        Func::cust(Alias::new(function))
            .arg(Expr::col(employee::Column::FullName))
            .arg(needle)
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn list_by_manager(&self, manager_id: i32) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::ManagerId.eq(manager_id))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn search_by_name(&self, manager_id: i32, name_part: &str) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::ManagerId.eq(manager_id))
            .filter(Expr::expr(self.position_of(name_part)).gt(0))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(
        &self,
        email: String,
        password_hash: Option<String>,
        full_name: String,
        manager_id: i32,
    ) -> AppResult<Employee> {
        let active_model = ActiveModel {
            guid: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            full_name: Set(full_name),
            created_at: Set(chrono::Utc::now()),
            manager_id: Set(manager_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn update(
        &self,
        id: i32,
        email: String,
        full_name: String,
        password_hash: Option<String>,
    ) -> AppResult<Employee> {
        let employee = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::not_found(MSG_EMPLOYEE_NOT_FOUND))?;

        let mut active: ActiveModel = employee.into();
        active.email = Set(email);
        active.full_name = Set(full_name);
        if let Some(hash) = password_hash {
            active.password_hash = Set(Some(hash));
        }

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_EMPLOYEE_NOT_FOUND));
        }

        Ok(())
    }
}
