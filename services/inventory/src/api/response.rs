//! 响应包装：分页信封和错误映射

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::PagedResult;
use errors::AppError;
use serde::Serialize;
use tracing::error;

/// 列表接口的分页信封
///
/// `next` / `previous` 是相对链接（路径 + 查询串），保留搜索词。
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

fn page_link(path: &str, page: u32, search: Option<&str>) -> String {
    match search {
        Some(s) => format!("{}?page={}&search={}", path, page, urlencoding::encode(s)),
        None => format!("{}?page={}", path, page),
    }
}

impl<T> Paginated<T> {
    pub fn from_page(path: &str, search: Option<&str>, page: PagedResult<T>) -> Self {
        let next = if (page.page as u64) * (page.page_size as u64) < page.total {
            Some(page_link(path, page.page + 1, search))
        } else {
            None
        };
        let previous = if page.page > 1 {
            Some(page_link(path, page.page - 1, search))
        } else {
            None
        };

        Self {
            count: page.total,
            next,
            previous,
            results: page.items,
        }
    }
}

/// API 错误：AppError 到 HTTP 响应的桥
#[derive(Debug)]
pub struct ApiError(pub AppError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let problem = self.0.to_problem_details();
        let status = StatusCode::from_u16(problem.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (status, Json(problem)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use common::Pagination;

    use super::*;

    fn page(items: Vec<u32>, total: u64, page_num: u32) -> PagedResult<u32> {
        PagedResult::new(items, total, &Pagination::new(page_num))
    }

    #[test]
    fn test_single_page_has_no_links() {
        let envelope = Paginated::from_page("/api/materials/", None, page(vec![1, 2], 2, 1));
        assert_eq!(envelope.count, 2);
        assert_eq!(envelope.next, None);
        assert_eq!(envelope.previous, None);
    }

    #[test]
    fn test_first_of_two_pages() {
        let envelope = Paginated::from_page("/api/materials/", None, page(vec![0; 10], 15, 1));
        assert_eq!(envelope.next.as_deref(), Some("/api/materials/?page=2"));
        assert_eq!(envelope.previous, None);
    }

    #[test]
    fn test_last_page_links_back() {
        let envelope = Paginated::from_page("/api/materials/", None, page(vec![0; 5], 15, 2));
        assert_eq!(envelope.next, None);
        assert_eq!(envelope.previous.as_deref(), Some("/api/materials/?page=1"));
    }

    #[test]
    fn test_links_keep_search_term() {
        let envelope =
            Paginated::from_page("/api/materials/", Some("bolt m3"), page(vec![0; 10], 25, 2));
        assert_eq!(
            envelope.next.as_deref(),
            Some("/api/materials/?page=3&search=bolt%20m3")
        );
        assert_eq!(
            envelope.previous.as_deref(),
            Some("/api/materials/?page=1&search=bolt%20m3")
        );
    }
}
