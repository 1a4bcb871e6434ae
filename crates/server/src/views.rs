//! Conversion of engine records into response views.

use api_types::{
    budget::BudgetView, category::CategoryView, report::ReportView,
    transaction::TransactionView, user::UserView,
};

pub(crate) fn map_entry_type(kind: engine::EntryType) -> api_types::EntryType {
    match kind {
        engine::EntryType::Income => api_types::EntryType::Income,
        engine::EntryType::Expense => api_types::EntryType::Expense,
    }
}

pub(crate) fn map_user(user: engine::User) -> UserView {
    UserView {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

pub(crate) fn map_category(category: engine::Category) -> CategoryView {
    CategoryView {
        id: category.id,
        name: category.name,
        entry_type: map_entry_type(category.entry_type),
        user_id: category.user_id,
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

pub(crate) fn map_budget(budget: engine::Budget) -> BudgetView {
    BudgetView {
        id: budget.id,
        user_id: budget.user_id,
        category_id: budget.category_id,
        planned_amount: budget.planned_amount,
        period: budget.period.to_string(),
        created_at: budget.created_at,
        updated_at: budget.updated_at,
    }
}

pub(crate) fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        user_id: tx.user_id,
        category_id: tx.category_id,
        date: tx.date,
        amount: tx.amount,
        entry_type: map_entry_type(tx.entry_type),
        created_at: tx.created_at,
        updated_at: tx.updated_at,
    }
}

pub(crate) fn map_report(report: engine::Report) -> ReportView {
    ReportView {
        id: report.id,
        user_id: report.user_id,
        period: report.period.to_string(),
        total_income: report.total_income,
        total_expense: report.total_expense,
        created_at: report.created_at,
        updated_at: report.updated_at,
    }
}
