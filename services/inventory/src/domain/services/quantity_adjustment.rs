//! 数量调整领域服务
//!
//! 出入库记录创建时对所属物料数量的派生更新。调整只在创建时
//! 发生一次，必须与记录插入处于同一数据库事务中；修改或删除
//! 记录不会回冲数量（保留原系统行为，见 DESIGN.md）。

use crate::domain::entities::TransactionType;

/// 移动方向对应的有符号数量增量
pub fn signed_delta(transaction_type: TransactionType, quantity: i32) -> i32 {
    match transaction_type {
        TransactionType::In => quantity,
        TransactionType::Out => -quantity,
    }
}

/// 计算调整后的物料数量
///
/// 出库允许把数量调成负数，超发不是错误。
pub fn apply(current: i32, transaction_type: TransactionType, quantity: i32) -> i32 {
    current + signed_delta(transaction_type, quantity)
}
