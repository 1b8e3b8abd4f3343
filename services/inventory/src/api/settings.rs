//! 系统设置接口

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiResult, AppState};
use crate::application::commands::ReplaceWarehousesCommand;

#[derive(Debug, Serialize)]
pub struct WarehousesResponse {
    pub warehouses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClearZeroStockResponse {
    pub status: &'static str,
    pub deleted_count: u64,
}

pub async fn warehouses(
    State(handler): State<AppState>,
) -> ApiResult<Json<WarehousesResponse>> {
    let warehouses = handler.warehouses().await?;
    Ok(Json(WarehousesResponse { warehouses }))
}

pub async fn replace_warehouses(
    State(handler): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<WarehousesResponse>> {
    let warehouses = handler
        .replace_warehouses(ReplaceWarehousesCommand { payload })
        .await?;
    Ok(Json(WarehousesResponse { warehouses }))
}

pub async fn clear_zero_stock(
    State(handler): State<AppState>,
) -> ApiResult<Json<ClearZeroStockResponse>> {
    let deleted_count = handler.clear_zero_stock().await?;
    Ok(Json(ClearZeroStockResponse {
        status: "ok",
        deleted_count,
    }))
}
