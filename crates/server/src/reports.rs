//! Financial report API endpoints

use api_types::report::{ReportPayload, ReportView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{NewReport, Report, ReportPatch};

use crate::{
    ServerError,
    fields::{Fields, Presence},
    payload::Payload,
    server::ServerState,
    views::map_report,
};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ReportView>>, ServerError> {
    let reports = state.engine.list::<Report>().await?;
    Ok(Json(reports.into_iter().map(map_report).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<ReportPayload>,
) -> Result<(StatusCode, Json<ReportView>), ServerError> {
    let mut fields = Fields::default();
    let user_id = fields.id("user_id", payload.user_id, Presence::Optional);
    let period = fields.period("period", payload.period, Presence::Required);
    let total_income = fields.integer("total_income", payload.total_income, Presence::Required);
    let total_expense =
        fields.integer("total_expense", payload.total_expense, Presence::Required);
    let (Some(period), Some(total_income), Some(total_expense)) =
        (period, total_income, total_expense)
    else {
        return Err(fields.into_error());
    };
    fields.into_result()?;

    let report = state
        .engine
        .create_report(NewReport {
            user_id,
            period,
            total_income,
            total_expense,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(map_report(report))))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ReportView>, ServerError> {
    let report = state.engine.get::<Report>(id).await?;
    Ok(Json(map_report(report)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Payload(payload): Payload<ReportPayload>,
) -> Result<Json<ReportView>, ServerError> {
    let mut fields = Fields::default();
    let patch = ReportPatch {
        user_id: fields.id("user_id", payload.user_id, Presence::Optional),
        period: fields.period("period", payload.period, Presence::Optional),
        total_income: fields.integer("total_income", payload.total_income, Presence::Optional),
        total_expense: fields.integer(
            "total_expense",
            payload.total_expense,
            Presence::Optional,
        ),
    };
    fields.into_result()?;

    let report = state.engine.update_report(id, patch).await?;
    Ok(Json(map_report(report)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete::<Report>(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reports of a user. Having none is a `404`, not an empty list.
pub async fn by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ReportView>>, ServerError> {
    let reports = state.engine.reports_for_user(user_id).await?;
    Ok(Json(reports.into_iter().map(map_report).collect()))
}
