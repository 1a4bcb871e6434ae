//! Categories group budgets and transactions under an income or expense label.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{EntryType, Record, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub entry_type: EntryType,
    /// Owning user, if any. Cleared when the user is deleted.
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub entry_type: String,
    pub user_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Category {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name,
            entry_type: value.entry_type.parse()?,
            user_id: value.user_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl Record for Category {
    type Entity = Entity;

    const LABEL: &'static str = "category";

    fn id_column() -> Column {
        Column::Id
    }

    fn from_model(model: Model) -> ResultEngine<Self> {
        model.try_into()
    }
}
