//! Budgets: a planned amount for a user, a category and a month.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{OwnedRecord, Period, Record, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Budget {
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    /// Planned amount in minor currency units, never negative.
    pub planned_amount: i64,
    pub period: Period,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub category_id: i32,
    pub planned_amount: i64,
    pub period: String,
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
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
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

impl TryFrom<Model> for Budget {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            category_id: value.category_id,
            planned_amount: value.planned_amount,
            period: value.period.parse()?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl Record for Budget {
    type Entity = Entity;

    const LABEL: &'static str = "budget";

    fn id_column() -> Column {
        Column::Id
    }

    fn from_model(model: Model) -> ResultEngine<Self> {
        model.try_into()
    }
}

impl OwnedRecord for Budget {
    fn owner_column() -> Column {
        Column::UserId
    }
}
