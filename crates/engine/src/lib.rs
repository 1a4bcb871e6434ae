//! Persistence and rules for the personal finance API.
//!
//! The [`Engine`] owns the database connection and exposes one method per
//! operation. List/get/delete are generic over [`Record`]; creation and
//! updates take a `New*` command or a `*Patch` struct per resource.

use sea_orm::DatabaseConnection;

pub use budgets::Budget;
pub use categories::Category;
pub use commands::{
    BudgetPatch, CategoryPatch, NewBudget, NewCategory, NewReport, NewTransaction, NewUser,
    ReportPatch, TransactionPatch, UserPatch,
};
pub use entry_type::EntryType;
pub use error::EngineError;
pub use ops::Session;
pub use period::Period;
pub use record::{OwnedRecord, Record};
pub use reports::Report;
pub use transactions::Transaction;
pub use users::User;
pub use validation::{InvalidValue, ValidationErrors};

mod access_tokens;
mod budgets;
mod categories;
mod commands;
mod entry_type;
mod error;
mod ops;
mod password;
mod period;
mod record;
mod reports;
mod transactions;
mod users;
mod util;
mod validation;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
