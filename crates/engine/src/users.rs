//! The module contains `User` struct and the `users` table.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{Record, ResultEngine};

/// An account.
///
/// The password hash stays in the table model and is never part of this
/// struct, so it cannot leak through a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::access_tokens::Entity")]
    AccessTokens,
}

impl Related<super::access_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessTokens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl Record for User {
    type Entity = Entity;

    const LABEL: &'static str = "user";

    // Removing an absent user is a silent success.
    const DELETE_MISSING_IS_ERROR: bool = false;

    fn id_column() -> Column {
        Column::Id
    }

    fn from_model(model: Model) -> ResultEngine<Self> {
        Ok(model.into())
    }
}
