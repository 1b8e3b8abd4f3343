//! 物料实体

use chrono::{DateTime, Utc};
use common::MaterialId;
use serde::{Deserialize, Serialize};

/// 物料实体
///
/// `material_id` 是对外可见的唯一编码，`quantity` 允许为负
/// （出库超发不做下限约束）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
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

/// 待插入的物料（主键和时间戳由数据库分配）
#[derive(Debug, Clone, PartialEq)]
pub struct NewMaterial {
    pub material_id: String,
    pub name: String,
    pub model_number: String,
    pub category: String,
    pub equipment: String,
    pub warehouse: String,
    pub shelf: String,
    pub quantity: i32,
    pub threshold: i32,
}

/// 默认补货阈值
pub const DEFAULT_THRESHOLD: i32 = 10;

impl Material {
    /// 是否低于补货阈值（仅供查询展示，无告警逻辑）
    pub fn below_threshold(&self) -> bool {
        self.quantity < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(quantity: i32, threshold: i32) -> Material {
        Material {
            id: MaterialId(1),
            material_id: "M1".to_string(),
            name: "Bolt".to_string(),
            model_number: String::new(),
            category: "Fasteners".to_string(),
            equipment: String::new(),
            warehouse: String::new(),
            shelf: String::new(),
            quantity,
            threshold,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_below_threshold() {
        assert!(material(5, 10).below_threshold());
        assert!(!material(10, 10).below_threshold());
        assert!(material(-3, 0).below_threshold());
    }
}
