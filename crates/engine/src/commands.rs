//! Command structs for engine operations.
//!
//! Each resource has one struct for creation, with every required field
//! present, and one patch struct for partial updates where `None` leaves the
//! stored value untouched. Only the fields listed here can ever be written.

use chrono::NaiveDate;

use crate::{EntryType, Period};

/// Create a user account.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Plaintext; hashed before it reaches the database.
    pub password: String,
}

#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create a category.
#[derive(Clone, Debug)]
pub struct NewCategory {
    pub name: String,
    pub entry_type: EntryType,
    pub user_id: Option<i32>,
}

#[derive(Clone, Debug, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub entry_type: Option<EntryType>,
    pub user_id: Option<i32>,
}

/// Create a budget.
#[derive(Clone, Debug)]
pub struct NewBudget {
    pub user_id: i32,
    pub category_id: i32,
    pub planned_amount: i64,
    pub period: Period,
}

#[derive(Clone, Debug, Default)]
pub struct BudgetPatch {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub planned_amount: Option<i64>,
    pub period: Option<Period>,
}

/// Create a transaction.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub date: NaiveDate,
    pub amount: i64,
    pub entry_type: EntryType,
}

#[derive(Clone, Debug, Default)]
pub struct TransactionPatch {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub amount: Option<i64>,
    pub entry_type: Option<EntryType>,
}

/// Create a financial report.
#[derive(Clone, Debug)]
pub struct NewReport {
    pub user_id: Option<i32>,
    pub period: Period,
    pub total_income: i64,
    pub total_expense: i64,
}

#[derive(Clone, Debug, Default)]
pub struct ReportPatch {
    pub user_id: Option<i32>,
    pub period: Option<Period>,
    pub total_income: Option<i64>,
    pub total_expense: Option<i64>,
}
