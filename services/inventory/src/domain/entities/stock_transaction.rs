//! 出入库记录实体

use chrono::{DateTime, Utc};
use common::{MaterialId, TransactionId};
use serde::{Deserialize, Serialize};

/// 移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    In,
    Out,
}

impl TransactionType {
    /// 解析对外编码，非法值返回 None（校验层负责拒绝）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

/// 待插入的出入库记录
#[derive(Debug, Clone, PartialEq)]
pub struct NewStockTransaction {
    pub material: MaterialId,
    pub transaction_type: TransactionType,
    pub quantity: i32,
}

/// 出入库记录读模型
///
/// `material_name` / `material_code` 是读取时从所属物料冗余出的
/// 只读字段，不落库。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub material: MaterialId,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub date: DateTime<Utc>,
    pub material_name: String,
    pub material_code: String,
}
