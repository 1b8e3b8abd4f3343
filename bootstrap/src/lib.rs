//! storeroom-bootstrap - 统一服务启动骨架

mod infrastructure;
mod runtime;

pub use infrastructure::*;
pub use runtime::*;
