//! 物料命令

use errors::{AppError, AppResult};

use crate::domain::entities::{DEFAULT_THRESHOLD, Material, NewMaterial};

/// 创建物料命令
///
/// 字段在校验阶段收紧为 NewMaterial：必填字段缺失返回
/// Validation 错误而不是反序列化失败。
#[derive(Debug, Clone, Default)]
pub struct CreateMaterialCommand {
    pub material_id: Option<String>,
    pub name: Option<String>,
    pub model_number: Option<String>,
    pub category: Option<String>,
    pub equipment: Option<String>,
    pub warehouse: Option<String>,
    pub shelf: Option<String>,
    pub quantity: Option<i32>,
    pub threshold: Option<i32>,
}

fn required(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("{} is required", field))),
    }
}

impl CreateMaterialCommand {
    pub fn validate(self) -> AppResult<NewMaterial> {
        Ok(NewMaterial {
            material_id: required(self.material_id, "material_id")?,
            name: required(self.name, "name")?,
            model_number: self.model_number.unwrap_or_default(),
            category: required(self.category, "category")?,
            equipment: self.equipment.unwrap_or_default(),
            warehouse: self.warehouse.unwrap_or_default(),
            shelf: self.shelf.unwrap_or_default(),
            quantity: self
                .quantity
                .ok_or_else(|| AppError::validation("quantity is required"))?,
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
        })
    }
}

/// 更新物料命令
///
/// `partial` 为 false 时（PUT）必填字段必须全部给出；
/// 为 true 时（PATCH）只覆盖提供的字段。
#[derive(Debug, Clone)]
pub struct UpdateMaterialCommand {
    pub fields: CreateMaterialCommand,
    pub partial: bool,
}

impl UpdateMaterialCommand {
    /// 把命令应用到现有物料上，返回更新后的实体
    pub fn apply_to(self, existing: &Material) -> AppResult<Material> {
        let mut updated = existing.clone();

        if self.partial {
            let f = self.fields;
            if let Some(material_id) = f.material_id {
                updated.material_id = material_id;
            }
            if let Some(name) = f.name {
                updated.name = name;
            }
            if let Some(model_number) = f.model_number {
                updated.model_number = model_number;
            }
            if let Some(category) = f.category {
                updated.category = category;
            }
            if let Some(equipment) = f.equipment {
                updated.equipment = equipment;
            }
            if let Some(warehouse) = f.warehouse {
                updated.warehouse = warehouse;
            }
            if let Some(shelf) = f.shelf {
                updated.shelf = shelf;
            }
            if let Some(quantity) = f.quantity {
                updated.quantity = quantity;
            }
            if let Some(threshold) = f.threshold {
                updated.threshold = threshold;
            }
        } else {
            let fields = self.fields.validate()?;
            updated.material_id = fields.material_id;
            updated.name = fields.name;
            updated.model_number = fields.model_number;
            updated.category = fields.category;
            updated.equipment = fields.equipment;
            updated.warehouse = fields.warehouse;
            updated.shelf = fields.shelf;
            updated.quantity = fields.quantity;
            updated.threshold = fields.threshold;
        }

        Ok(updated)
    }
}
