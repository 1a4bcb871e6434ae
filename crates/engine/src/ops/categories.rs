use chrono::Utc;
use sea_orm::{ActiveValue, prelude::*};

use crate::{
    Category, CategoryPatch, EngineError, NewCategory, ResultEngine, User, ValidationErrors,
    categories,
    util::{assign, check_name},
};

use super::Engine;

impl Engine {
    pub async fn create_category(&self, input: NewCategory) -> ResultEngine<Category> {
        let mut errors = ValidationErrors::new();
        let name = check_name(&mut errors, "name", &input.name);
        self.check_reference::<User>(&mut errors, "user_id", input.user_id)
            .await?;
        errors.into_result()?;

        let now = Utc::now();
        let active = categories::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            entry_type: ActiveValue::Set(input.entry_type.as_str().to_string()),
            user_id: ActiveValue::Set(input.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        let model = active
            .insert(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "category"))?;
        model.try_into()
    }

    /// Apply a partial update. Returns the stored row untouched when nothing changes.
    pub async fn update_category(&self, id: i32, patch: CategoryPatch) -> ResultEngine<Category> {
        let current = self.find_model::<Category>(id).await?;

        let mut errors = ValidationErrors::new();
        let name = patch
            .name
            .as_deref()
            .map(|name| check_name(&mut errors, "name", name));
        self.check_reference::<User>(&mut errors, "user_id", patch.user_id)
            .await?;
        errors.into_result()?;

        let mut active: categories::ActiveModel = current.clone().into();
        let mut changed = assign(&mut active.name, &current.name, name);
        changed |= assign(
            &mut active.entry_type,
            &current.entry_type,
            patch.entry_type.map(|kind| kind.as_str().to_string()),
        );
        changed |= assign(&mut active.user_id, &current.user_id, patch.user_id.map(Some));
        if !changed {
            return current.try_into();
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        let model = active
            .update(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "category"))?;
        model.try_into()
    }
}
