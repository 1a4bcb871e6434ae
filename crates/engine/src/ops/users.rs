use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, prelude::*};

use crate::{
    EngineError, NewUser, ResultEngine, User, UserPatch, ValidationErrors,
    password::{hash_password, verify_password},
    users,
    util::{assign, check_email, check_name, check_password},
};

use super::Engine;

impl Engine {
    /// Create a user from the users resource.
    ///
    /// Email uniqueness is left to the unique index: a duplicate surfaces as
    /// [`EngineError::ExistingKey`] rather than a validation error.
    pub async fn create_user(&self, input: NewUser) -> ResultEngine<User> {
        let mut errors = ValidationErrors::new();
        let (name, email) = validate_new_user(&mut errors, &input);
        errors.into_result()?;

        let model = self.insert_user(name, email, &input.password).await?;
        Ok(model.into())
    }

    /// Apply a partial update to a user.
    ///
    /// A password is only rehashed when it differs from the stored one.
    pub async fn update_user(&self, id: i32, patch: UserPatch) -> ResultEngine<User> {
        let current = self.find_model::<User>(id).await?;

        let mut errors = ValidationErrors::new();
        let name = patch
            .name
            .as_deref()
            .map(|name| check_name(&mut errors, "name", name));
        let email = patch
            .email
            .as_deref()
            .map(|email| check_email(&mut errors, "email", email));
        if let Some(password) = patch.password.as_deref() {
            check_password(&mut errors, "password", password);
        }
        errors.into_result()?;

        let mut active: users::ActiveModel = current.clone().into();
        let mut changed = assign(&mut active.name, &current.name, name);
        changed |= assign(&mut active.email, &current.email, email);
        if let Some(password) = patch.password.as_deref()
            && !verify_password(password, &current.password)?
        {
            active.password = ActiveValue::Set(hash_password(password)?);
            changed = true;
        }
        if !changed {
            return Ok(current.into());
        }

        active.updated_at = ActiveValue::Set(Utc::now());
        let model = active
            .update(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "email"))?;
        Ok(model.into())
    }

    pub(super) async fn insert_user(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> ResultEngine<users::Model> {
        let now = Utc::now();
        let active = users::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(hash_password(password)?),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };
        active
            .insert(&self.database)
            .await
            .map_err(|err| EngineError::from_write(err, "email"))
    }

    pub(super) async fn find_user_by_email(
        &self,
        email: &str,
    ) -> ResultEngine<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.database)
            .await?)
    }
}

/// Field rules shared by registration and the users resource.
///
/// Returns the normalized name and email.
pub(super) fn validate_new_user(errors: &mut ValidationErrors, input: &NewUser) -> (String, String) {
    let name = check_name(errors, "name", &input.name);
    let email = check_email(errors, "email", &input.email);
    check_password(errors, "password", &input.password);
    (name, email)
}
