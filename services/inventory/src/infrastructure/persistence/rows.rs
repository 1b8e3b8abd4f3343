//! 数据库行映射结构

use chrono::{DateTime, Utc};
use common::{MaterialId, TransactionId};
use sqlx::FromRow;

use crate::domain::entities::{Material, TransactionRecord, TransactionType};

/// 物料数据库行
#[derive(Debug, FromRow)]
pub struct MaterialRow {
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

impl MaterialRow {
    pub fn into_material(self) -> Material {
        Material {
            id: MaterialId(self.id),
            material_id: self.material_id,
            name: self.name,
            model_number: self.model_number,
            category: self.category,
            equipment: self.equipment,
            warehouse: self.warehouse,
            shelf: self.shelf,
            quantity: self.quantity,
            threshold: self.threshold,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// 出入库记录数据库行（联表冗余所属物料的名称和编码）
///
/// `material_ref` 是外键列 `stock_transactions.material_id`，
/// 改名是为了和物料编码列 `materials.material_id` 区分。
#[derive(Debug, FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub material_ref: i64,
    pub transaction_type: String,
    pub quantity: i32,
    pub date: DateTime<Utc>,
    pub material_name: String,
    pub material_code: String,
}

impl TransactionRow {
    pub fn into_record(self) -> TransactionRecord {
        // 约束 CHECK (transaction_type IN ('IN','OUT')) 保证这里不会失配
        let transaction_type =
            TransactionType::parse(&self.transaction_type).unwrap_or(TransactionType::In);

        TransactionRecord {
            id: TransactionId(self.id),
            material: MaterialId(self.material_ref),
            transaction_type,
            quantity: self.quantity,
            date: self.date,
            material_name: self.material_name,
            material_code: self.material_code,
        }
    }
}
