//! 物料仓储接口

use async_trait::async_trait;
use common::{MaterialId, PagedResult, Pagination};
use errors::AppResult;

use crate::domain::entities::{Material, NewMaterial};

/// 物料仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// 根据 ID 查找物料
    async fn find_by_id(&self, id: MaterialId) -> AppResult<Option<Material>>;

    /// 根据物料编码查找物料（创建前的编码查重走这里）
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Material>>;

    /// 保存物料（新建），编码重复时返回 Validation 错误
    async fn save(&self, material: &NewMaterial) -> AppResult<Material>;

    /// 更新物料（整行覆盖）
    async fn update(&self, material: &Material) -> AppResult<Material>;

    /// 删除物料，级联删除其出入库记录
    async fn delete(&self, id: MaterialId) -> AppResult<()>;

    /// 列表查询：search 对所有描述字段做不区分大小写的子串匹配
    async fn list<'a>(
        &self,
        search: Option<&'a str>,
        pagination: Pagination,
    ) -> AppResult<PagedResult<Material>>;

    /// 删除所有数量 <= 0 的物料，返回删除数量
    async fn delete_zero_stock(&self) -> AppResult<u64>;
}
