//! 出入库记录仓储接口

use async_trait::async_trait;
use common::{PagedResult, Pagination, TransactionId};
use errors::AppResult;

use crate::domain::entities::{NewStockTransaction, TransactionRecord};

/// 出入库记录仓储接口
///
/// 所有读取都联表冗余所属物料的名称和编码。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// 根据 ID 查找记录
    async fn find_by_id(&self, id: TransactionId) -> AppResult<Option<TransactionRecord>>;

    /// 创建记录并调整物料数量
    ///
    /// 插入和数量调整在同一数据库事务中提交：要么都生效，
    /// 要么都不生效。物料行加行锁，并发调整串行化。
    async fn record(&self, transaction: &NewStockTransaction) -> AppResult<TransactionRecord>;

    /// 更新记录（不回冲物料数量）
    async fn update(
        &self,
        id: TransactionId,
        fields: &NewStockTransaction,
    ) -> AppResult<TransactionRecord>;

    /// 删除记录（不回冲物料数量）
    async fn delete(&self, id: TransactionId) -> AppResult<()>;

    /// 列表查询：按 date 倒序，search 匹配方向、物料名称和物料编码
    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        pagination: Pagination,
    ) -> AppResult<PagedResult<TransactionRecord>>;
}
