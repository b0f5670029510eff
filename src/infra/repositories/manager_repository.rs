//! Manager repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::manager::{self, ActiveModel, Entity as ManagerEntity};
use crate::domain::Manager;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Manager repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Find manager by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Manager>>;

    /// Find every manager registered under an exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Manager>>;

    /// Create a new manager
    async fn create(
        &self,
        email: String,
        password_hash: String,
        full_name: String,
    ) -> AppResult<Manager>;

    /// Delete manager by ID; owned employees go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ManagerRepository
pub struct ManagerStore {
    db: DatabaseConnection,
}

impl ManagerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ManagerRepository for ManagerStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Manager>> {
        let result = ManagerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Manager::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Vec<Manager>> {
        let models = ManagerEntity::find()
            .filter(manager::Column::Email.eq(email))
            .order_by_asc(manager::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Manager::from).collect())
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        full_name: String,
    ) -> AppResult<Manager> {
        let active_model = ActiveModel {
            guid: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            full_name: Set(full_name),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Manager::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        ManagerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
