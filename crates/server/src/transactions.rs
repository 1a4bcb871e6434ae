//! Transaction API endpoints

use api_types::transaction::{TransactionPayload, TransactionView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{NewTransaction, Transaction, TransactionPatch};

use crate::{
    ServerError,
    fields::{Fields, Presence},
    payload::Payload,
    server::ServerState,
    views::map_transaction,
};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let txs = state.engine.list::<Transaction>().await?;
    Ok(Json(txs.into_iter().map(map_transaction).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<TransactionPayload>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let mut fields = Fields::default();
    let user_id = fields.id("user_id", payload.user_id, Presence::Optional);
    let category_id = fields.id("category_id", payload.category_id, Presence::Optional);
    let date = fields.date("date", payload.date, Presence::Required);
    let amount = fields.integer("amount", payload.amount, Presence::Required);
    let entry_type = fields.entry_type("type", payload.entry_type, Presence::Required);
    let (Some(date), Some(amount), Some(entry_type)) = (date, amount, entry_type) else {
        return Err(fields.into_error());
    };
    fields.into_result()?;

    let tx = state
        .engine
        .create_transaction(NewTransaction {
            user_id,
            category_id,
            date,
            amount,
            entry_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state.engine.get::<Transaction>(id).await?;
    Ok(Json(map_transaction(tx)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<TransactionPayload>,
) -> Result<Json<TransactionView>, ServerError> {
    let mut fields = Fields::default();
    let patch = TransactionPatch {
        user_id: fields.id("user_id", payload.user_id, Presence::Optional),
        category_id: fields.id("category_id", payload.category_id, Presence::Optional),
        date: fields.date("date", payload.date, Presence::Optional),
        amount: fields.integer("amount", payload.amount, Presence::Optional),
        entry_type: fields.entry_type("type", payload.entry_type, Presence::Optional),
    };
    fields.into_result()?;

    let tx = state.engine.update_transaction(id, patch).await?;
    Ok(Json(map_transaction(tx)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete::<Transaction>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// All transactions of a user, `[]` when there are none.
pub async fn by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let txs = state.engine.list_by_user::<Transaction>(user_id).await?;
    Ok(Json(txs.into_iter().map(map_transaction).collect()))
}
