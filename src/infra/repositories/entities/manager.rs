//! Manager database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Manager;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "managers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guid: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Manager {
    fn from(model: Model) -> Self {
        Manager {
            id: model.id,
            guid: model.guid,
            email: model.email,
            password_hash: model.password_hash,
            full_name: model.full_name,
            created_at: model.created_at,
        }
    }
}
