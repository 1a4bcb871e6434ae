//! Transactions: dated income or expense movements.
//!
//! A transaction may point at a category, but its `entry_type` is stored on
//! its own and is not required to match the category's.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;

use crate::{EntryType, OwnedRecord, Record, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: i32,
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub date: NaiveDate,
    /// Amount in minor currency units, never negative. The direction is
    /// carried by `entry_type`.
    pub amount: i64,
    pub entry_type: EntryType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub date: Date,
    pub amount: i64,
    pub entry_type: String,
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
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Transaction {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            category_id: value.category_id,
            date: value.date,
            amount: value.amount,
            entry_type: value.entry_type.parse()?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl Record for Transaction {
    type Entity = Entity;

    const LABEL: &'static str = "transaction";

    fn id_column() -> Column {
        Column::Id
    }

    fn from_model(model: Model) -> ResultEngine<Self> {
        model.try_into()
    }
}

impl OwnedRecord for Transaction {
    fn owner_column() -> Column {
        Column::UserId
    }
}
