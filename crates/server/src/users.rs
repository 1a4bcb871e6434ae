//! User API endpoints

use api_types::user::{UserPayload, UserView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{NewUser, User, UserPatch};

use crate::{
    ServerError,
    fields::{Fields, Presence},
    payload::Payload,
    server::ServerState,
    views::map_user,
};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ServerError> {
    let users = state.engine.list::<User>().await?;
    Ok(Json(users.into_iter().map(map_user).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let input = new_user(payload)?;
    let user = state.engine.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(map_user(user))))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.get::<User>(id).await?;
    Ok(Json(map_user(user)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<UserPayload>,
) -> Result<Json<UserView>, ServerError> {
    let patch = UserPatch {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };
    let user = state.engine.update_user(id, patch).await?;
    Ok(Json(map_user(user)))
}

/// Always `204`, whether or not the user existed.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete::<User>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shared by `POST /users` and `POST /register`.
pub(crate) fn new_user(payload: UserPayload) -> Result<NewUser, ServerError> {
    let mut fields = Fields::default();
    let name = fields.text("name", payload.name, Presence::Required);
    let email = fields.text("email", payload.email, Presence::Required);
    let password = fields.text("password", payload.password, Presence::Required);
    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        return Err(fields.into_error());
    };

    Ok(NewUser {
        name,
        email,
        password,
    })
}
