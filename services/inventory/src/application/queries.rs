//! 列表查询参数

use common::Pagination;

/// 列表查询：搜索词 + 页码
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl ListQuery {
    pub fn new(search: Option<String>, page: u32) -> Self {
        // 空白搜索词等同于没有搜索
        let search = search.filter(|s| !s.trim().is_empty());
        Self {
            search,
            pagination: Pagination::new(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_none() {
        assert_eq!(ListQuery::new(Some("  ".to_string()), 1).search, None);
        assert_eq!(
            ListQuery::new(Some("bolt".to_string()), 1).search,
            Some("bolt".to_string())
        );
    }

    #[test]
    fn test_page_floor_is_one() {
        assert_eq!(ListQuery::new(None, 0).pagination.page, 1);
        assert_eq!(ListQuery::new(None, 3).pagination.page, 3);
    }
}
