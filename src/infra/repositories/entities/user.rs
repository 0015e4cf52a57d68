//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "directory", table_name = "users")]
pub struct Model {
    /// Assigned by the database on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub password: Option<String>,
    pub name: String,
    pub picture: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            password: model.password,
            name: model.name,
            picture: model.picture,
        }
    }
}
