//! Budget API endpoints

use api_types::budget::{BudgetPayload, BudgetView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{Budget, BudgetPatch, NewBudget};

use crate::{
    ServerError,
    fields::{Fields, Presence},
    payload::Payload,
    server::ServerState,
    views::map_budget,
};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BudgetView>>, ServerError> {
    let budgets = state.engine.list::<Budget>().await?;
    Ok(Json(budgets.into_iter().map(map_budget).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<BudgetPayload>,
) -> Result<(StatusCode, Json<BudgetView>), ServerError> {
    let mut fields = Fields::default();
    let user_id = fields.id("user_id", payload.user_id, Presence::Required);
    let category_id = fields.id("category_id", payload.category_id, Presence::Required);
    let planned_amount =
        fields.integer("planned_amount", payload.planned_amount, Presence::Required);
    let period = fields.period("period", payload.period, Presence::Required);
    let (Some(user_id), Some(category_id), Some(planned_amount), Some(period)) =
        (user_id, category_id, planned_amount, period)
    else {
        return Err(fields.into_error());
    };
    fields.into_result()?;

    let budget = state
        .engine
        .create_budget(NewBudget {
            user_id,
            category_id,
            planned_amount,
            period,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_budget(budget))))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<BudgetView>, ServerError> {
    let budget = state.engine.get::<Budget>(id).await?;
    Ok(Json(map_budget(budget)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<BudgetPayload>,
) -> Result<Json<BudgetView>, ServerError> {
    let mut fields = Fields::default();
    let patch = BudgetPatch {
        user_id: fields.id("user_id", payload.user_id, Presence::Optional),
        category_id: fields.id("category_id", payload.category_id, Presence::Optional),
        planned_amount: fields.integer(
            "planned_amount",
            payload.planned_amount,
            Presence::Optional,
        ),
        period: fields.period("period", payload.period, Presence::Optional),
    };
    fields.into_result()?;

    let budget = state.engine.update_budget(id, patch).await?;
    Ok(Json(map_budget(budget)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete::<Budget>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Budgets of one user. An unknown user simply has none.
pub async fn by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<BudgetView>>, ServerError> {
    let budgets = state.engine.list_by_user::<Budget>(user_id).await?;
    Ok(Json(budgets.into_iter().map(map_budget).collect()))
}
