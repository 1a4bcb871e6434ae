use chrono::Utc;
use sea_orm::{ActiveValue, prelude::*};

use crate::{
    Budget, BudgetPatch, Category, EngineError, NewBudget, ResultEngine, User, ValidationErrors,
    budgets,
    util::{assign, check_non_negative},
};

use super::Engine;

impl Engine {
    /// Create a budget. Both the user and the category must exist.
    pub async fn create_budget(&self, input: NewBudget) -> ResultEngine<Budget> {
        let mut errors = ValidationErrors::new();
        check_non_negative(&mut errors, "planned_amount", input.planned_amount);
        self.check_reference::<User>(&mut errors, "user_id", Some(input.user_id))
            .await?;
        self.check_reference::<Category>(&mut errors, "category_id", Some(input.category_id))
            .await?;
        errors.into_result()?;

        let now = Utc::now();
        let active = budgets::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(input.user_id),
            category_id: ActiveValue::Set(input.category_id),
            planned_amount: ActiveValue::Set(input.planned_amount),
            period: ActiveValue::Set(input.period.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        let model = active
            .insert(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "budget"))?;
        model.try_into()
    }

    /// Apply a partial update. A missing id is reported before any field rule.
    pub async fn update_budget(&self, id: i32, patch: BudgetPatch) -> ResultEngine<Budget> {
        let current = self.find_model::<Budget>(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(planned_amount) = patch.planned_amount {
            check_non_negative(&mut errors, "planned_amount", planned_amount);
        }
        self.check_reference::<User>(&mut errors, "user_id", patch.user_id)
            .await?;
        self.check_reference::<Category>(&mut errors, "category_id", patch.category_id)
            .await?;
        errors.into_result()?;

        let mut active: budgets::ActiveModel = current.clone().into();
        let mut changed = assign(&mut active.user_id, &current.user_id, patch.user_id);
        changed |= assign(&mut active.category_id, &current.category_id, patch.category_id);
        changed |= assign(
            &mut active.planned_amount,
            &current.planned_amount,
            patch.planned_amount,
        );
        changed |= assign(
            &mut active.period,
            &current.period,
            patch.period.map(|period| period.to_string()),
        );
        if !changed {
            return current.try_into();
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        let model = active
            .update(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "budget"))?;
        model.try_into()
    }
}
