//! 系统设置命令

use errors::{AppError, AppResult};
use serde_json::Value;

/// 替换仓库列表命令
///
/// 请求体必须是 `{"warehouses": ["...", ...]}`，元素全部为字符串，
/// 否则返回 Validation 错误。
#[derive(Debug, Clone)]
pub struct ReplaceWarehousesCommand {
    pub payload: Value,
}

impl ReplaceWarehousesCommand {
    pub fn validate(self) -> AppResult<Vec<String>> {
        let list = self
            .payload
            .get("warehouses")
            .and_then(Value::as_array)
            .ok_or_else(|| AppError::validation("warehouses must be a list of strings"))?;

        list.iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("warehouses must be a list of strings"))
            })
            .collect()
    }
}
