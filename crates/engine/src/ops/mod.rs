use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{Record, ResultEngine, ValidationErrors};

use super::Engine;

mod auth;
mod budgets;
mod categories;
mod records;
mod reports;
mod transactions;
mod users;

pub use auth::Session;

impl Engine {
    /// Whether a row with `id` exists for `R`.
    async fn exists<R: Record>(&self, id: i32) -> ResultEngine<bool> {
        let found = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.database)
            .await?;
        Ok(found.is_some())
    }

    /// Record a validation error on `field` when `id` is given but no such row exists.
    async fn check_reference<R: Record>(
        &self,
        errors: &mut ValidationErrors,
        field: &str,
        id: Option<i32>,
    ) -> ResultEngine<()> {
        if let Some(id) = id
            && !self.exists::<R>(id).await?
        {
            errors.add(field, format!("The selected {field} is invalid."));
        }
        Ok(())
    }
}
