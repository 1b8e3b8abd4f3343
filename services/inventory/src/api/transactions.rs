//! 出入库记录接口

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::TransactionId;
use serde::{Deserialize, Serialize};

use crate::api::{ApiResult, AppState, ListParams, Paginated};
use crate::application::commands::{CreateTransactionCommand, UpdateTransactionCommand};
use crate::domain::entities::TransactionRecord;

#[derive(Debug, Deserialize, Default)]
pub struct TransactionRequest {
    pub material: Option<i64>,
    pub transaction_type: Option<String>,
    pub quantity: Option<i32>,
}

impl From<TransactionRequest> for CreateTransactionCommand {
    fn from(req: TransactionRequest) -> Self {
        Self {
            material: req.material,
            transaction_type: req.transaction_type,
            quantity: req.quantity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub material: i64,
    pub transaction_type: String,
    pub quantity: i32,
    pub date: DateTime<Utc>,
    pub material_name: String,
    pub material_code: String,
}

impl From<TransactionRecord> for TransactionResponse {
    fn from(r: TransactionRecord) -> Self {
        Self {
            id: r.id.0,
            material: r.material.0,
            transaction_type: r.transaction_type.as_str().to_string(),
            quantity: r.quantity,
            date: r.date,
            material_name: r.material_name,
            material_code: r.material_code,
        }
    }
}

pub async fn list(
    State(handler): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Paginated<TransactionResponse>>> {
    let query = params.into_query();
    let search = query.search.clone();
    let page = handler.list_transactions(query).await?;

    Ok(Json(Paginated::from_page(
        "/api/transactions/",
        search.as_deref(),
        page.map(TransactionResponse::from),
    )))
}

pub async fn detail(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TransactionResponse>> {
    let record = handler.get_transaction(TransactionId(id)).await?;
    Ok(Json(record.into()))
}

pub async fn create(
    State(handler): State<AppState>,
    Json(req): Json<TransactionRequest>,
) -> ApiResult<(StatusCode, Json<TransactionResponse>)> {
    let record = handler.create_transaction(req.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn update(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let cmd = UpdateTransactionCommand {
        fields: req.into(),
        partial: false,
    };
    let record = handler.update_transaction(TransactionId(id), cmd).await?;
    Ok(Json(record.into()))
}

pub async fn patch(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let cmd = UpdateTransactionCommand {
        fields: req.into(),
        partial: true,
    };
    let record = handler.update_transaction(TransactionId(id), cmd).await?;
    Ok(Json(record.into()))
}

pub async fn remove(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    handler.delete_transaction(TransactionId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
