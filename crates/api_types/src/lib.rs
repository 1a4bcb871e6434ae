//! Request payloads and response views of the HTTP API.
//!
//! Payload structs list exactly the fields a client may write; unknown JSON
//! keys are ignored. All payload fields are optional so that a missing field
//! becomes a per-field validation message instead of a body rejection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of money as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "Pemasukan")]
    Income,
    #[serde(rename = "Pengeluaran")]
    Expense,
}

/// An integer that clients may also send as a numeric string (`"150000"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Text(String),
}

impl Numeric {
    /// The integer value, or `None` when the text is not an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Error body. `errors` is present only for validation failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<std::collections::BTreeMap<String, Vec<String>>>,
}

pub mod user {
    use super::*;

    /// Body of `POST /users`, `PUT /users/{id}` and `POST /register`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserPayload {
        pub name: Option<String>,
        pub email: Option<String>,
        pub password: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub name: String,
        pub email: String,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod auth {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct LoginPayload {
        pub email: Option<String>,
        pub password: Option<String>,
    }

    /// Returned by register and login.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TokenResponse {
        pub user: user::UserView,
        pub access_token: String,
        pub token_type: String,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CategoryPayload {
        pub name: Option<String>,
        #[serde(rename = "type")]
        pub entry_type: Option<String>,
        pub user_id: Option<Numeric>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: i32,
        pub name: String,
        #[serde(rename = "type")]
        pub entry_type: EntryType,
        pub user_id: Option<i32>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct BudgetPayload {
        pub user_id: Option<Numeric>,
        pub category_id: Option<Numeric>,
        pub planned_amount: Option<Numeric>,
        /// `YYYY-MM`.
        pub period: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub id: i32,
        pub user_id: i32,
        pub category_id: i32,
        pub planned_amount: i64,
        pub period: String,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionPayload {
        pub user_id: Option<Numeric>,
        pub category_id: Option<Numeric>,
        /// `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
        pub date: Option<String>,
        pub amount: Option<Numeric>,
        #[serde(rename = "type")]
        pub entry_type: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i32,
        pub user_id: Option<i32>,
        pub category_id: Option<i32>,
        pub date: NaiveDate,
        pub amount: i64,
        #[serde(rename = "type")]
        pub entry_type: EntryType,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

pub mod report {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ReportPayload {
        pub user_id: Option<Numeric>,
        pub period: Option<String>,
        pub total_income: Option<Numeric>,
        pub total_expense: Option<Numeric>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportView {
        pub id: i32,
        pub user_id: Option<i32>,
        pub period: String,
        pub total_income: i64,
        pub total_expense: i64,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}
