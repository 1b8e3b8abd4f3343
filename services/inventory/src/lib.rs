//! 库存服务
//!
//! 物料台账 + 出入库流水的 REST 后端。出入库记录创建时在同一
//! 数据库事务内调整物料库存数量。

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
