//! Registration, login and bearer tokens.
//!
//! A token is an opaque random string stored in `access_tokens`. Resolving a
//! token yields the owning [`User`], which the server attaches to the request.

use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, NewUser, ResultEngine, User, ValidationErrors, access_tokens,
    password::verify_password, users,
};

use super::{Engine, users::validate_new_user};

/// An authenticated user together with the token issued for it.
#[derive(Clone, Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Engine {
    /// Create an account and log it in.
    ///
    /// Unlike [`Engine::create_user`] a taken email is reported as a
    /// validation error on `email`.
    pub async fn register(&self, input: NewUser) -> ResultEngine<Session> {
        let mut errors = ValidationErrors::new();
        let (name, email) = validate_new_user(&mut errors, &input);
        if !errors.contains("email") && self.find_user_by_email(&email).await?.is_some() {
            errors.add("email", "The email has already been taken.");
        }
        errors.into_result()?;

        let model = self.insert_user(name, email, &input.password).await?;
        let token = self.issue_token(model.id).await?;
        Ok(Session {
            user: model.into(),
            token,
        })
    }

    /// Check credentials and issue a fresh token.
    pub async fn login(&self, email: &str, password: &str) -> ResultEngine<Session> {
        let email = email.trim().to_lowercase();
        let Some(model) = self.find_user_by_email(&email).await? else {
            return Err(invalid_credentials());
        };
        if !verify_password(password, &model.password)? {
            return Err(invalid_credentials());
        }

        let token = self.issue_token(model.id).await?;
        Ok(Session {
            user: model.into(),
            token,
        })
    }

    /// Resolve a bearer token to its user.
    pub async fn authenticate(&self, token: &str) -> ResultEngine<User> {
        let found = access_tokens::Entity::find()
            .filter(access_tokens::Column::Token.eq(token))
            .find_also_related(users::Entity)
            .one(&self.database)
            .await?;

        match found {
            Some((_, Some(user))) => Ok(user.into()),
            _ => Err(EngineError::Unauthorized("invalid token".to_string())),
        }
    }

    /// Revoke a token. Revoking an unknown token is a no-op.
    pub async fn revoke_token(&self, token: &str) -> ResultEngine<()> {
        access_tokens::Entity::delete_many()
            .filter(access_tokens::Column::Token.eq(token))
            .exec(&self.database)
            .await?;
        Ok(())
    }

    async fn issue_token(&self, user_id: i32) -> ResultEngine<String> {
        let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        let active = access_tokens::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token.clone()),
            created_at: ActiveValue::Set(Utc::now()),
        };
        active.insert(&self.database).await?;
        Ok(token)
    }
}

fn invalid_credentials() -> EngineError {
    EngineError::Unauthorized("invalid credentials".to_string())
}
