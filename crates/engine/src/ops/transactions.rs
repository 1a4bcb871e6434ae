use chrono::Utc;
use sea_orm::{ActiveValue, prelude::*};

use crate::{
    Category, EngineError, NewTransaction, ResultEngine, Transaction, TransactionPatch, User,
    ValidationErrors, transactions,
    util::{assign, check_non_negative},
};

use super::Engine;

impl Engine {
    /// Record a transaction. User and category are optional but must exist when given.
    pub async fn create_transaction(&self, input: NewTransaction) -> ResultEngine<Transaction> {
        let mut errors = ValidationErrors::new();
        check_non_negative(&mut errors, "amount", input.amount);
        self.check_reference::<User>(&mut errors, "user_id", input.user_id)
            .await?;
        self.check_reference::<Category>(&mut errors, "category_id", input.category_id)
            .await?;
        errors.into_result()?;

        let now = Utc::now();
        let active = transactions::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(input.user_id),
            category_id: ActiveValue::Set(input.category_id),
            date: ActiveValue::Set(input.date),
            amount: ActiveValue::Set(input.amount),
            entry_type: ActiveValue::Set(input.entry_type.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        let model = active
            .insert(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "transaction"))?;
        model.try_into()
    }

    pub async fn update_transaction(
        &self,
        id: i32,
        patch: TransactionPatch,
    ) -> ResultEngine<Transaction> {
        let current = self.find_model::<Transaction>(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(amount) = patch.amount {
            check_non_negative(&mut errors, "amount", amount);
        }
        self.check_reference::<User>(&mut errors, "user_id", patch.user_id)
            .await?;
        self.check_reference::<Category>(&mut errors, "category_id", patch.category_id)
            .await?;
        errors.into_result()?;

        let mut active: transactions::ActiveModel = current.clone().into();
        let mut changed = assign(&mut active.user_id, &current.user_id, patch.user_id.map(Some));
        changed |= assign(
            &mut active.category_id,
            &current.category_id,
            patch.category_id.map(Some),
        );
        changed |= assign(&mut active.date, &current.date, patch.date);
        changed |= assign(&mut active.amount, &current.amount, patch.amount);
        changed |= assign(
            &mut active.entry_type,
            &current.entry_type,
            patch.entry_type.map(|kind| kind.as_str().to_string()),
        );
        if !changed {
            return current.try_into();
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        let model = active
            .update(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "transaction"))?;
        model.try_into()
    }
}
