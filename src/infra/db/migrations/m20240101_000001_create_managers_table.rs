//! Migration: Create managers table.

use sea_orm_migration::prelude::*;

use crate::config::MAX_TEXT_LENGTH;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Managers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Managers::Guid).uuid().not_null())
                    .col(
                        ColumnDef::new(Managers::Email)
                            .string_len(MAX_TEXT_LENGTH)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Managers::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Managers::FullName)
                            .string_len(MAX_TEXT_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Managers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Login and registration look managers up by email
        manager
            .create_index(
                Index::create()
                    .name("idx_managers_email")
                    .table(Managers::Table)
                    .col(Managers::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Managers {
    Table,
    Id,
    Guid,
    Email,
    PasswordHash,
    FullName,
    CreatedAt,
}
