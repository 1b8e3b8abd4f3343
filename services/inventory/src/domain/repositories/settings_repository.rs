//! 系统设置存储接口

use async_trait::async_trait;
use errors::AppResult;

/// 仓库名称列表存储
///
/// 设置是进程外的单一资源，放在接口后面以便替换为真正的
/// 事务性存储而不改动服务契约。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseStore: Send + Sync {
    /// 读取仓库列表；从未写入过时返回 None
    async fn load(&self) -> AppResult<Option<Vec<String>>>;

    /// 整体替换仓库列表（非合并），资源不存在时创建
    async fn replace(&self, warehouses: &[String]) -> AppResult<()>;
}
