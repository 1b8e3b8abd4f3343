//! API 路由

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::application::ServiceHandler;
use crate::application::queries::ListQuery;

mod health;
mod materials;
mod response;
mod settings;
mod transactions;

pub use response::{ApiError, ApiResult, Paginated};

pub type AppState = Arc<ServiceHandler>;

/// 列表接口的查询参数
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl ListParams {
    fn into_query(self) -> ListQuery {
        ListQuery::new(self.search, self.page.unwrap_or(1))
    }
}

pub fn routes(handler: AppState) -> Router {
    Router::new()
        .route(
            "/api/materials/",
            get(materials::list).post(materials::create),
        )
        .route(
            "/api/materials/{id}/",
            get(materials::detail)
                .put(materials::update)
                .patch(materials::patch)
                .delete(materials::remove),
        )
        .route(
            "/api/transactions/",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/{id}/",
            get(transactions::detail)
                .put(transactions::update)
                .patch(transactions::patch)
                .delete(transactions::remove),
        )
        .route(
            "/api/settings/warehouses/",
            get(settings::warehouses).post(settings::replace_warehouses),
        )
        .route(
            "/api/settings/clear_zero_stock/",
            post(settings::clear_zero_stock),
        )
        .route("/api/health", get(health::health_check))
        .with_state(handler)
}
