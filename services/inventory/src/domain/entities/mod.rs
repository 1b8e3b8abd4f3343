mod material;
mod stock_transaction;

pub use material::*;
pub use stock_transaction::*;
