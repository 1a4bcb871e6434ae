use chrono::Utc;
use sea_orm::{ActiveValue, prelude::*};

use crate::{
    EngineError, NewReport, Report, ReportPatch, ResultEngine, User, ValidationErrors, reports,
    util::{assign, check_non_negative},
};

use super::Engine;

impl Engine {
    pub async fn create_report(&self, input: NewReport) -> ResultEngine<Report> {
        let mut errors = ValidationErrors::new();
        check_non_negative(&mut errors, "total_income", input.total_income);
        check_non_negative(&mut errors, "total_expense", input.total_expense);
        self.check_reference::<User>(&mut errors, "user_id", input.user_id)
            .await?;
        errors.into_result()?;

        let now = Utc::now();
        let active = reports::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(input.user_id),
            period: ActiveValue::Set(input.period.to_string()),
            total_income: ActiveValue::Set(input.total_income),
            total_expense: ActiveValue::Set(input.total_expense),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        let model = active
            .insert(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "financial report"))?;
        model.try_into()
    }

    pub async fn update_report(&self, id: i32, patch: ReportPatch) -> ResultEngine<Report> {
        let current = self.find_model::<Report>(id).await?;

        let mut errors = ValidationErrors::new();
        if let Some(total_income) = patch.total_income {
            check_non_negative(&mut errors, "total_income", total_income);
        }
        if let Some(total_expense) = patch.total_expense {
            check_non_negative(&mut errors, "total_expense", total_expense);
        }
        self.check_reference::<User>(&mut errors, "user_id", patch.user_id)
            .await?;
        errors.into_result()?;

        let mut active: reports::ActiveModel = current.clone().into();
        let mut changed = assign(&mut active.user_id, &current.user_id, patch.user_id.map(Some));
        changed |= assign(
            &mut active.period,
            &current.period,
            patch.period.map(|period| period.to_string()),
        );
        changed |= assign(
            &mut active.total_income,
            &current.total_income,
            patch.total_income,
        );
        changed |= assign(
            &mut active.total_expense,
            &current.total_expense,
            patch.total_expense,
        );
        if !changed {
            return current.try_into();
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        let model = active
            .update(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "financial report"))?;
        model.try_into()
    }

    /// Reports of one user.
    ///
    /// Unlike [`Engine::list_by_user`], finding nothing is
    /// [`EngineError::KeyNotFound`].
    pub async fn reports_for_user(&self, user_id: i32) -> ResultEngine<Vec<Report>> {
        let reports = self.list_by_user::<Report>(user_id).await?;
        if reports.is_empty() {
            return Err(EngineError::KeyNotFound(format!(
                "financial reports for user {user_id}"
            )));
        }
        Ok(reports)
    }
}
