//! 物料接口

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::MaterialId;
use serde::{Deserialize, Serialize};

use crate::api::{ApiResult, AppState, ListParams, Paginated};
use crate::application::commands::{CreateMaterialCommand, UpdateMaterialCommand};
use crate::domain::entities::Material;

/// 物料请求体
///
/// 必填校验放在命令层做，缺字段返回 400 而不是 422。
#[derive(Debug, Deserialize, Default)]
pub struct MaterialRequest {
    pub material_id: Option<String>,
    pub name: Option<String>,
    pub model_number: Option<String>,
    pub category: Option<String>,
    pub equipment: Option<String>,
    pub warehouse: Option<String>,
    pub shelf: Option<String>,
    pub quantity: Option<i32>,
    pub threshold: Option<i32>,
}

impl From<MaterialRequest> for CreateMaterialCommand {
    fn from(req: MaterialRequest) -> Self {
        Self {
            material_id: req.material_id,
            name: req.name,
            model_number: req.model_number,
            category: req.category,
            equipment: req.equipment,
            warehouse: req.warehouse,
            shelf: req.shelf,
            quantity: req.quantity,
            threshold: req.threshold,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    pub id: i64,
    pub material_id: String,
    pub name: String,
    pub model_number: String,
    pub category: String,
    pub equipment: String,
    pub warehouse: String,
    pub shelf: String,
    pub quantity: i32,
    pub threshold: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Material> for MaterialResponse {
    fn from(m: Material) -> Self {
        Self {
            id: m.id.0,
            material_id: m.material_id,
            name: m.name,
            model_number: m.model_number,
            category: m.category,
            equipment: m.equipment,
            warehouse: m.warehouse,
            shelf: m.shelf,
            quantity: m.quantity,
            threshold: m.threshold,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn list(
    State(handler): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Paginated<MaterialResponse>>> {
    let query = params.into_query();
    let search = query.search.clone();
    let page = handler.list_materials(query).await?;

    Ok(Json(Paginated::from_page(
        "/api/materials/",
        search.as_deref(),
        page.map(MaterialResponse::from),
    )))
}

pub async fn detail(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MaterialResponse>> {
    let material = handler.get_material(MaterialId(id)).await?;
    Ok(Json(material.into()))
}

pub async fn create(
    State(handler): State<AppState>,
    Json(req): Json<MaterialRequest>,
) -> ApiResult<(StatusCode, Json<MaterialResponse>)> {
    let material = handler.create_material(req.into()).await?;
    Ok((StatusCode::CREATED, Json(material.into())))
}

pub async fn update(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<MaterialRequest>,
) -> ApiResult<Json<MaterialResponse>> {
    let cmd = UpdateMaterialCommand {
        fields: req.into(),
        partial: false,
    };
    let material = handler.update_material(MaterialId(id), cmd).await?;
    Ok(Json(material.into()))
}

pub async fn patch(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<MaterialRequest>,
) -> ApiResult<Json<MaterialResponse>> {
    let cmd = UpdateMaterialCommand {
        fields: req.into(),
        partial: true,
    };
    let material = handler.update_material(MaterialId(id), cmd).await?;
    Ok(Json(material.into()))
}

pub async fn remove(
    State(handler): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    handler.delete_material(MaterialId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
