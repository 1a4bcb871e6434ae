//! Financial reports: stored income/expense totals for a user and month.
//!
//! Reports are written directly by clients. They are not derived from the
//! transactions table and nothing keeps the two in sync.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{OwnedRecord, Period, Record, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub id: i32,
    pub user_id: Option<i32>,
    pub period: Period,
    pub total_income: i64,
    pub total_expense: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub period: String,
    pub total_income: i64,
    pub total_expense: i64,
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

impl TryFrom<Model> for Report {
    type Error = crate::EngineError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            period: value.period.parse()?,
            total_income: value.total_income,
            total_expense: value.total_expense,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

impl Record for Report {
    type Entity = Entity;

    const LABEL: &'static str = "financial report";

    fn id_column() -> Column {
        Column::Id
    }

    fn from_model(model: Model) -> ResultEngine<Self> {
        model.try_into()
    }
}

impl OwnedRecord for Report {
    fn owner_column() -> Column {
        Column::UserId
    }
}
