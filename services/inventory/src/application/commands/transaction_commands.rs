//! 出入库记录命令

use common::MaterialId;
use errors::{AppError, AppResult};

use crate::domain::entities::{NewStockTransaction, TransactionRecord, TransactionType};

/// 创建出入库记录命令
///
/// 方向必须是 IN / OUT，数量必须为正；非法方向在这里拒绝，
/// 绝不能带着未知方向进入数量调整。
#[derive(Debug, Clone, Default)]
pub struct CreateTransactionCommand {
    pub material: Option<i64>,
    pub transaction_type: Option<String>,
    pub quantity: Option<i32>,
}

fn parse_type(value: Option<&str>) -> AppResult<TransactionType> {
    let raw = value.ok_or_else(|| AppError::validation("transaction_type is required"))?;
    TransactionType::parse(raw).ok_or_else(|| {
        AppError::validation(format!(
            "transaction_type must be IN or OUT, got '{}'",
            raw
        ))
    })
}

fn parse_quantity(value: Option<i32>) -> AppResult<i32> {
    let quantity = value.ok_or_else(|| AppError::validation("quantity is required"))?;
    if quantity <= 0 {
        return Err(AppError::validation("quantity must be positive"));
    }
    Ok(quantity)
}

impl CreateTransactionCommand {
    pub fn validate(self) -> AppResult<NewStockTransaction> {
        let material = self
            .material
            .ok_or_else(|| AppError::validation("material is required"))?;

        Ok(NewStockTransaction {
            material: MaterialId(material),
            transaction_type: parse_type(self.transaction_type.as_deref())?,
            quantity: parse_quantity(self.quantity)?,
        })
    }
}

/// 更新出入库记录命令
///
/// 更新不回冲物料数量，只改记录本身。
#[derive(Debug, Clone)]
pub struct UpdateTransactionCommand {
    pub fields: CreateTransactionCommand,
    pub partial: bool,
}

impl UpdateTransactionCommand {
    pub fn apply_to(self, existing: &TransactionRecord) -> AppResult<NewStockTransaction> {
        if !self.partial {
            return self.fields.validate();
        }

        let f = self.fields;
        let transaction_type = match f.transaction_type {
            Some(raw) => parse_type(Some(&raw))?,
            None => existing.transaction_type,
        };
        let quantity = match f.quantity {
            Some(q) => parse_quantity(Some(q))?,
            None => existing.quantity,
        };
        let material = f.material.map(MaterialId).unwrap_or(existing.material);

        Ok(NewStockTransaction {
            material,
            transaction_type,
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use common::TransactionId;

    use super::*;

    fn record() -> TransactionRecord {
        TransactionRecord {
            id: TransactionId(1),
            material: MaterialId(2),
            transaction_type: TransactionType::In,
            quantity: 10,
            date: Utc::now(),
            material_name: "Bolt".to_string(),
            material_code: "M1".to_string(),
        }
    }

    #[test]
    fn test_valid_create() {
        let cmd = CreateTransactionCommand {
            material: Some(2),
            transaction_type: Some("OUT".to_string()),
            quantity: Some(30),
        };
        let new = cmd.validate().expect("valid");
        assert_eq!(new.material, MaterialId(2));
        assert_eq!(new.transaction_type, TransactionType::Out);
        assert_eq!(new.quantity, 30);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let cmd = CreateTransactionCommand {
            material: Some(2),
            transaction_type: Some("TRANSFER".to_string()),
            quantity: Some(30),
        };
        let err = cmd.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("TRANSFER"));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        for quantity in [0, -5] {
            let cmd = CreateTransactionCommand {
                material: Some(2),
                transaction_type: Some("IN".to_string()),
                quantity: Some(quantity),
            };
            assert!(matches!(
                cmd.validate().unwrap_err(),
                AppError::Validation(_)
            ));
        }
    }

    #[test]
    fn test_patch_keeps_existing_fields() {
        let cmd = UpdateTransactionCommand {
            fields: CreateTransactionCommand {
                quantity: Some(99),
                ..Default::default()
            },
            partial: true,
        };
        let updated = cmd.apply_to(&record()).expect("patch applies");
        assert_eq!(updated.quantity, 99);
        assert_eq!(updated.transaction_type, TransactionType::In);
        assert_eq!(updated.material, MaterialId(2));
    }

    #[test]
    fn test_patch_validates_given_fields() {
        let cmd = UpdateTransactionCommand {
            fields: CreateTransactionCommand {
                transaction_type: Some("bad".to_string()),
                ..Default::default()
            },
            partial: true,
        };
        assert!(matches!(
            cmd.apply_to(&record()).unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
