//! Migration: Create the users table in its own schema.

use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

use crate::config::DB_SCHEMA;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The table lives in a dedicated schema namespace
        manager
            .get_connection()
            .execute_unprepared(&format!("CREATE SCHEMA IF NOT EXISTS {}", DB_SCHEMA))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table((Alias::new(DB_SCHEMA), Users::Table))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).text().not_null())
                    .col(ColumnDef::new(Users::Password).text().null())
                    .col(ColumnDef::new(Users::Name).text().not_null())
                    .col(ColumnDef::new(Users::Picture).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table((Alias::new(DB_SCHEMA), Users::Table))
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    Name,
    Picture,
}
