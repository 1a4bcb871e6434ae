//! Category API endpoints

use api_types::category::{CategoryPayload, CategoryView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{Category, CategoryPatch, NewCategory};

use crate::{
    ServerError,
    fields::{Fields, Presence},
    payload::Payload,
    server::{MaybeUser, ServerState},
    views::map_category,
};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CategoryView>>, ServerError> {
    let categories = state.engine.list::<Category>().await?;
    Ok(Json(categories.into_iter().map(map_category).collect()))
}

/// Without an explicit `user_id` the category belongs to the caller, when
/// the request carries a valid bearer token.
pub async fn create(
    State(state): State<ServerState>,
    MaybeUser(caller): MaybeUser,
    Payload(payload): Payload<CategoryPayload>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let mut fields = Fields::default();
    let name = fields.text("name", payload.name, Presence::Required);
    let entry_type = fields.entry_type("type", payload.entry_type, Presence::Required);
    let user_id = fields.id("user_id", payload.user_id, Presence::Optional);
    let (Some(name), Some(entry_type)) = (name, entry_type) else {
        return Err(fields.into_error());
    };
    fields.into_result()?;

    let category = state
        .engine
        .create_category(NewCategory {
            name,
            entry_type,
            user_id: user_id.or(caller.map(|user| user.id)),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryView>, ServerError> {
    let category = state.engine.get::<Category>(id).await?;
    Ok(Json(map_category(category)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<CategoryPayload>,
) -> Result<Json<CategoryView>, ServerError> {
    let mut fields = Fields::default();
    let patch = CategoryPatch {
        name: fields.text("name", payload.name, Presence::Optional),
        entry_type: fields.entry_type("type", payload.entry_type, Presence::Optional),
        user_id: fields.id("user_id", payload.user_id, Presence::Optional),
    };
    fields.into_result()?;

    let category = state.engine.update_category(id, patch).await?;
    Ok(Json(map_category(category)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete::<Category>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
