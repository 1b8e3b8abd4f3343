//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 物料 ID（数据库自增主键）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct MaterialId(pub i64);

impl MaterialId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }
}

/// 出入库记录 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct TransactionId(pub i64);

impl TransactionId {
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }
}

/// 分页参数
///
/// 页码从 1 开始，超出范围的页返回空结果而不是错误。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

/// 列表接口固定页大小
pub const DEFAULT_PAGE_SIZE: u32 = 10;

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 查询偏移量；用 u64 计算，页码再大也不会溢出
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) as u64 * self.page_size as u64
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            items,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        }
    }

    pub fn total_pages(&self) -> u32 {
        ((self.total as f64) / (self.page_size as f64)).ceil() as u32
    }

    /// 转换结果项类型，保留分页信息
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
