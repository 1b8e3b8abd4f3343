//! Business logic handler

use std::sync::Arc;

use common::{MaterialId, PagedResult, TransactionId};
use errors::{AppError, AppResult};
use tracing::info;

use crate::application::commands::{
    CreateMaterialCommand, CreateTransactionCommand, ReplaceWarehousesCommand,
    UpdateMaterialCommand, UpdateTransactionCommand,
};
use crate::application::queries::ListQuery;
use crate::domain::entities::{Material, TransactionRecord};
use crate::domain::repositories::{MaterialRepository, TransactionRepository, WarehouseStore};

pub struct ServiceHandler {
    materials: Arc<dyn MaterialRepository>,
    transactions: Arc<dyn TransactionRepository>,
    warehouses: Arc<dyn WarehouseStore>,
}

impl ServiceHandler {
    pub fn new(
        materials: Arc<dyn MaterialRepository>,
        transactions: Arc<dyn TransactionRepository>,
        warehouses: Arc<dyn WarehouseStore>,
    ) -> Self {
        Self {
            materials,
            transactions,
            warehouses,
        }
    }

    // ========== 物料 CRUD ==========

    pub async fn list_materials(&self, query: ListQuery) -> AppResult<PagedResult<Material>> {
        self.materials
            .list(query.search.as_deref(), query.pagination)
            .await
    }

    pub async fn get_material(&self, id: MaterialId) -> AppResult<Material> {
        self.materials
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("material {} not found", id)))
    }

    /// 创建物料
    pub async fn create_material(&self, cmd: CreateMaterialCommand) -> AppResult<Material> {
        let new_material = cmd.validate()?;

        if self
            .materials
            .find_by_code(&new_material.material_id)
            .await?
            .is_some()
        {
            return Err(AppError::validation(format!(
                "material with material_id '{}' already exists",
                new_material.material_id
            )));
        }

        let material = self.materials.save(&new_material).await?;
        info!(
            material_id = %material.material_id,
            id = %material.id,
            "Material created"
        );
        Ok(material)
    }

    /// 更新物料（PUT 整体覆盖，PATCH 局部合并）
    pub async fn update_material(
        &self,
        id: MaterialId,
        cmd: UpdateMaterialCommand,
    ) -> AppResult<Material> {
        let existing = self.get_material(id).await?;
        let updated = cmd.apply_to(&existing)?;
        self.materials.update(&updated).await
    }

    /// 删除物料，级联删除其出入库记录
    pub async fn delete_material(&self, id: MaterialId) -> AppResult<()> {
        self.materials.delete(id).await?;
        info!(id = %id, "Material deleted");
        Ok(())
    }

    // ========== 出入库记录 ==========

    pub async fn list_transactions(
        &self,
        query: ListQuery,
    ) -> AppResult<PagedResult<TransactionRecord>> {
        self.transactions
            .list(query.search.as_deref(), query.pagination)
            .await
    }

    pub async fn get_transaction(&self, id: TransactionId) -> AppResult<TransactionRecord> {
        self.transactions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("transaction {} not found", id)))
    }

    /// 创建出入库记录
    ///
    /// 记录插入和物料数量调整由仓储在同一数据库事务中完成。
    pub async fn create_transaction(
        &self,
        cmd: CreateTransactionCommand,
    ) -> AppResult<TransactionRecord> {
        let new_transaction = cmd.validate()?;

        let record = self.transactions.record(&new_transaction).await?;
        info!(
            transaction_id = %record.id,
            material = %record.material,
            transaction_type = record.transaction_type.as_str(),
            quantity = record.quantity,
            "Stock transaction recorded, material quantity adjusted"
        );
        Ok(record)
    }

    /// 更新出入库记录
    ///
    /// 已知的一致性缺口：不回冲原记录造成的数量变化。
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        cmd: UpdateTransactionCommand,
    ) -> AppResult<TransactionRecord> {
        let existing = self.get_transaction(id).await?;
        let fields = cmd.apply_to(&existing)?;
        self.transactions.update(id, &fields).await
    }

    /// 删除出入库记录（同样不回冲数量）
    pub async fn delete_transaction(&self, id: TransactionId) -> AppResult<()> {
        self.transactions.delete(id).await
    }

    // ========== 系统设置 ==========

    /// 仓库名称列表；从未配置过时返回 NotFound
    pub async fn warehouses(&self) -> AppResult<Vec<String>> {
        self.warehouses
            .load()
            .await?
            .ok_or_else(|| AppError::not_found("warehouse list has not been configured"))
    }

    /// 整体替换仓库名称列表
    pub async fn replace_warehouses(&self, cmd: ReplaceWarehousesCommand) -> AppResult<Vec<String>> {
        let warehouses = cmd.validate()?;
        self.warehouses.replace(&warehouses).await?;
        info!(count = warehouses.len(), "Warehouse list replaced");
        Ok(warehouses)
    }

    /// 清理零库存：删除所有数量 <= 0 的物料（级联删除其记录）
    ///
    /// 不可逆，无确认步骤（沿用原系统设计）。
    pub async fn clear_zero_stock(&self) -> AppResult<u64> {
        let deleted = self.materials.delete_zero_stock().await?;
        info!(deleted_count = deleted, "Zero-stock materials cleared");
        Ok(deleted)
    }
}
